// src/data.rs
//! Records produced by the scrapers and the places query.
use std::collections::HashMap;
use std::fmt;

use url::Url;

use crate::core::sanitize::state_key;

/// One national site as shown on its detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Site {
    /// Designation label, e.g. "National Park". Some sites have none.
    pub category: String,
    pub name: String,
    /// "City, Region"
    pub address: String,
    /// "49931" or "82190-0168"
    pub postal_code: String,
    pub phone: String,
}

impl Site {
    /// Listing line: `Isle Royale (National Park): Houghton, MI 49931`
    pub fn info(&self) -> String {
        format!("{} ({}): {} {}", self.name, self.category, self.address, self.postal_code)
    }
}

/// Absolute URL of a site's detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteLocator(pub Url);

impl SiteLocator {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SiteLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateEntry {
    /// Name as printed on the home page, e.g. "Michigan".
    pub name: String,
    /// Listing page, e.g. `https://www.nps.gov/state/mi/index.htm`.
    pub url: Url,
}

/// State name → listing page. Keys are stored lowercased, so lookups are
/// case-insensitive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateDirectory {
    entries: HashMap<String, StateEntry>,
}

impl StateDirectory {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = StateEntry>,
    {
        let entries = entries
            .into_iter()
            .map(|e| (state_key(&e.name), e))
            .collect();
        Self { entries }
    }

    pub fn lookup(&self, name: &str) -> Option<&StateEntry> {
        self.entries.get(&state_key(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lowercased key → listing URL.
    pub fn urls(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .map(|(k, e)| (k.clone(), s!(e.url.as_str())))
            .collect()
    }
}

/// A point of interest near a site. Missing API fields are already replaced
/// by their sentinels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NearbyPlace {
    pub name: String,
    pub category: String,
    pub address: String,
}

impl fmt::Display for NearbyPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {} ({}) : {}", self.name, self.category, self.address)
    }
}
