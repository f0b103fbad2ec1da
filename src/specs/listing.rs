// src/specs/listing.rs
//! State page → site locators.
//!
//! Sites sit under `#list_parks`, one `<h3><a href="/isro/">Name</a></h3>` each.
//! Document order is kept: menu numbers shown to the user index into it.
use scraper::Html;
use url::Url;

use crate::core::html::{absolutize, find_in, find_in_doc, href_of, selector};
use crate::core::net::Fetch;
use crate::data::SiteLocator;
use crate::error::{ParseError, Result};

pub fn list_sites(fetch: &dyn Fetch, base: &Url, state_url: &Url) -> Result<Vec<SiteLocator>> {
    let doc = fetch.get(state_url.as_str(), &[])?;
    let sites = parse_listing(&doc, base, state_url.as_str())?;
    logf!("{} sites listed on {state_url}", sites.len());
    Ok(sites)
}

pub fn parse_listing(doc: &str, base: &Url, page: &str) -> std::result::Result<Vec<SiteLocator>, ParseError> {
    let html = Html::parse_document(doc);
    let list = find_in_doc(&html, "#list_parks")
        .ok_or_else(|| ParseError::new(page, "site list (#list_parks)"))?;

    list.select(&selector("h3"))
        .map(|h3| {
            find_in(h3, "a")
                .and_then(href_of)
                .and_then(|href| absolutize(base, href))
                .map(SiteLocator)
                .ok_or_else(|| ParseError::new(page, "site link"))
        })
        .collect()
}
