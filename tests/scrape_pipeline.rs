// tests/scrape_pipeline.rs
//
// Each stage through the public API, against stubbed pages.
//
mod common;

use common::*;
use nps_scrape::config::SiteOptions;
use nps_scrape::core::StaticPages;
use nps_scrape::data::SiteLocator;
use nps_scrape::error::{Error, ParseError};
use nps_scrape::places::PlacesQuery;
use nps_scrape::session::parse_selection;
use nps_scrape::specs::{listing, site, states};
use url::Url;

#[test]
fn directory_from_a_single_entry_home_page() {
    let home = r#"<html><body>
        <ul class="dropdown-menu SearchBar-keywordSearch">
          <li><a href="/state/mi/index.htm">Michigan</a></li>
        </ul></body></html>"#;
    let pages = StaticPages::new().with(HOME_URL, home);

    let dir = states::resolve(&pages, &SiteOptions::default()).unwrap();
    let urls = dir.urls();
    assert_eq!(urls.len(), 1);
    assert_eq!(urls.get("michigan").map(String::as_str), Some("https://www.nps.gov/state/mi/index.htm"));
    assert!(dir.lookup("Michigan").is_some());
    assert!(dir.lookup("michigan").is_some());
}

#[test]
fn two_headings_two_locators_and_selection_bounds() {
    let pages = michigan();
    let base = SiteOptions::default().base_url;
    let state = Url::parse(MI_URL).unwrap();

    let sites = listing::list_sites(&pages, &base, &state).unwrap();
    assert_eq!(sites.len(), 2);

    let first = &sites[parse_selection("1", sites.len()).unwrap()];
    let second = &sites[parse_selection("2", sites.len()).unwrap()];
    assert_eq!(first.as_str(), ISRO_URL);
    assert_eq!(second.as_str(), SLBE_URL);
    assert!(parse_selection("3", sites.len()).is_err());
}

#[test]
fn detail_page_without_postal_code_is_a_parse_error() {
    let url = "https://www.nps.gov/mnrr/";
    let pages = StaticPages::new().with(url, NO_ZIP);
    let err = site::fetch_site(&pages, &SiteLocator(Url::parse(url).unwrap())).unwrap_err();
    match err {
        Error::Parse(ParseError { what, page }) => {
            assert_eq!(what, "postal code");
            assert_eq!(page, url);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn nearby_places_for_a_parsed_site() {
    let pages = michigan();
    let isro = site::fetch_site(&pages, &SiteLocator(Url::parse(ISRO_URL).unwrap())).unwrap();

    let query = PlacesQuery::new(options().places);
    let places = query.find_nearby(&pages, &isro.postal_code).unwrap();
    assert_eq!(places.len(), 4);
    assert_eq!(places[1].category, "no category");
    assert_eq!(places[2].address, "no address");
    assert_eq!(places[3].address, "no city");

    let req = pages.requests().into_iter().last().unwrap();
    assert_eq!(query_value(&req.query, "key"), Some("test-key"));
    assert_eq!(query_value(&req.query, "origin"), Some("49931"));
}
