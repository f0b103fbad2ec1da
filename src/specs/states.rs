// src/specs/states.rs
//! Home page → state directory.
//!
//! The "Find a Park by State" dropdown (`ul.dropdown-menu.SearchBar-keywordSearch`)
//! holds one `<li><a href="/state/xx/index.htm">Name</a></li>` per state.
use scraper::Html;
use url::Url;

use crate::config::SiteOptions;
use crate::core::html::{absolutize, find_in, find_in_doc, href_of, selector, text_of};
use crate::core::net::Fetch;
use crate::data::{StateDirectory, StateEntry};
use crate::error::{ParseError, Result};

const STATE_MENU: &str = "ul.dropdown-menu.SearchBar-keywordSearch";

/// Fetch the home page and build the directory.
pub fn resolve(fetch: &dyn Fetch, site: &SiteOptions) -> Result<StateDirectory> {
    let home = site.home_url()?;
    let doc = fetch.get(home.as_str(), &[])?;
    let dir = parse_directory(&doc, &site.base_url, home.as_str())?;
    logf!("state directory built: {} states", dir.len());
    Ok(dir)
}

pub fn parse_directory(doc: &str, base: &Url, page: &str) -> std::result::Result<StateDirectory, ParseError> {
    let html = Html::parse_document(doc);
    let menu = find_in_doc(&html, STATE_MENU)
        .ok_or_else(|| ParseError::new(page, "state navigation list"))?;

    let mut entries = Vec::new();
    for li in menu.select(&selector("li")) {
        let name = text_of(li);
        let url = find_in(li, "a")
            .and_then(href_of)
            .and_then(|href| absolutize(base, href))
            .ok_or_else(|| ParseError::new(page, "state link"))?;
        logd!("state {name:?} -> {url}");
        entries.push(StateEntry { name, url });
    }

    if entries.is_empty() {
        return Err(ParseError::new(page, "state entries"));
    }
    Ok(StateDirectory::from_entries(entries))
}
