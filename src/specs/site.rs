// src/specs/site.rs
//! Site detail page → `Site`.
//!
//! Fields come from the hero banner and the schema.org `PostalAddress` markup:
//!
//! | field       | selector                               |
//! |-------------|----------------------------------------|
//! | name        | `div.Hero-titleContainer a`            |
//! | category    | `span.Hero-designation` (may be empty) |
//! | locality    | `span[itemprop="addressLocality"]`     |
//! | region      | `span[itemprop="addressRegion"]`       |
//! | postal code | `span[itemprop="postalCode"]`          |
//! | phone       | `span[itemprop="telephone"]`           |
//!
//! Any missing element fails the whole page.
use scraper::Html;

use crate::core::html::{find_in_doc, text_of};
use crate::core::net::Fetch;
use crate::data::{Site, SiteLocator};
use crate::error::{ParseError, Result};

pub fn fetch_site(fetch: &dyn Fetch, locator: &SiteLocator) -> Result<Site> {
    let doc = fetch.get(locator.as_str(), &[])?;
    let site = parse_site(&doc, locator.as_str())?;
    logd!("parsed {} ({})", site.name, locator);
    Ok(site)
}

pub fn parse_site(doc: &str, page: &str) -> std::result::Result<Site, ParseError> {
    let html = Html::parse_document(doc);
    let field = |css: &'static str, what: &'static str| {
        find_in_doc(&html, css)
            .map(text_of)
            .ok_or_else(|| ParseError::new(page, what))
    };

    let name = field("div.Hero-titleContainer a", "site name")?;
    let category = field("span.Hero-designation", "designation")?;
    let locality = field(r#"span[itemprop="addressLocality"]"#, "address locality")?;
    let region = field(r#"span[itemprop="addressRegion"]"#, "address region")?;
    let postal_code = field(r#"span[itemprop="postalCode"]"#, "postal code")?;
    let phone = field(r#"span[itemprop="telephone"]"#, "telephone")?;

    Ok(Site {
        category,
        name,
        address: join!(&locality, ", ", &region),
        postal_code,
        phone,
    })
}
