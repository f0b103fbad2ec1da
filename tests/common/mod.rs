// tests/common/mod.rs
#![allow(dead_code)]

use nps_scrape::config::AppOptions;
use nps_scrape::config::consts::PLACES_ENDPOINT;
use nps_scrape::core::StaticPages;

pub const HOME: &str = include_str!("../fixtures/home.html");
pub const STATE_MI: &str = include_str!("../fixtures/state_mi.html");
pub const ISRO: &str = include_str!("../fixtures/site_isro.html");
pub const SLBE: &str = include_str!("../fixtures/site_slbe.html");
pub const NO_ZIP: &str = include_str!("../fixtures/site_no_zip.html");
pub const NEARBY: &str = include_str!("../fixtures/nearby.json");

pub const HOME_URL: &str = "https://www.nps.gov/index.htm";
pub const MI_URL: &str = "https://www.nps.gov/state/mi/index.htm";
pub const ISRO_URL: &str = "https://www.nps.gov/isro/";
pub const SLBE_URL: &str = "https://www.nps.gov/slbe/";

pub fn options() -> AppOptions {
    AppOptions::from_lookup(|key| (key == "MAPQUEST_API_KEY").then(|| "test-key".to_string()))
        .expect("options")
}

/// Home page, Michigan with two sites, and the places endpoint.
pub fn michigan() -> StaticPages {
    StaticPages::new()
        .with(HOME_URL, HOME)
        .with(MI_URL, STATE_MI)
        .with(ISRO_URL, ISRO)
        .with(SLBE_URL, SLBE)
        .with(PLACES_ENDPOINT, NEARBY)
}

/// Value of `key` in the recorded query, if present.
pub fn query_value<'a>(query: &'a [(String, String)], key: &str) -> Option<&'a str> {
    query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}
