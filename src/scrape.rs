// src/scrape.rs
//! Multi-page collection on top of the page specs.
use url::Url;

use crate::{
    core::net::Fetch,
    data::Site,
    error::Result,
    progress::Progress,
    specs::{listing, site},
};

/// Everything shown for one state: every listed site, fetched in listing order.
///
/// One request for the listing plus one per site. The first failing page
/// aborts the whole collection so menu numbers always match the listing.
pub fn collect_state_sites(
    fetch: &dyn Fetch,
    base: &Url,
    state_url: &Url,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Site>> {
    let locators = listing::list_sites(fetch, base, state_url)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(locators.len());
    }

    let mut sites = Vec::with_capacity(locators.len());
    let mut failure = None;
    for (i, locator) in locators.iter().enumerate() {
        match site::fetch_site(fetch, locator) {
            Ok(site) => sites.push(site),
            Err(e) => {
                loge!("site {locator} failed: {e}");
                failure = Some(e);
                break;
            }
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    match failure {
        Some(e) => Err(e),
        None => Ok(sites),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::net::StaticPages;
    use crate::error::Error;

    const STATE_MI: &str = include_str!("../tests/fixtures/state_mi.html");
    const ISRO: &str = include_str!("../tests/fixtures/site_isro.html");
    const SLBE: &str = include_str!("../tests/fixtures/site_slbe.html");

    #[derive(Default)]
    struct Recorder {
        total: Option<usize>,
        done: Vec<usize>,
        finished: bool,
    }

    impl Progress for Recorder {
        fn begin(&mut self, total: usize) { self.total = Some(total); }
        fn item_done(&mut self, index: usize) { self.done.push(index); }
        fn finish(&mut self) { self.finished = true; }
    }

    fn urls() -> (Url, Url) {
        (
            Url::parse("https://www.nps.gov").unwrap(),
            Url::parse("https://www.nps.gov/state/mi/index.htm").unwrap(),
        )
    }

    #[test]
    fn collects_sites_in_listing_order() {
        let (base, state) = urls();
        let pages = StaticPages::new()
            .with(state.as_str(), STATE_MI)
            .with("https://www.nps.gov/isro/", ISRO)
            .with("https://www.nps.gov/slbe/", SLBE);

        let mut rec = Recorder::default();
        let sites = collect_state_sites(&pages, &base, &state, Some(&mut rec)).unwrap();

        let names: Vec<&str> = sites.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Isle Royale", "Sleeping Bear Dunes"]);
        assert_eq!(sites[1].postal_code, "49630-9797");
        assert_eq!(rec.total, Some(2));
        assert_eq!(rec.done, vec![0, 1]);
        assert!(rec.finished);
    }

    #[test]
    fn one_broken_site_fails_the_state() {
        let (base, state) = urls();
        let pages = StaticPages::new()
            .with(state.as_str(), STATE_MI)
            .with("https://www.nps.gov/isro/", ISRO);

        let mut rec = Recorder::default();
        let err = collect_state_sites(&pages, &base, &state, Some(&mut rec)).unwrap_err();
        assert!(matches!(err, Error::Fetch(_)));
        assert_eq!(rec.done, vec![0]);
        assert!(rec.finished);
    }
}
