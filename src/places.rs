// src/places.rs
//! Nearby places via the MapQuest radius search.
//!
//! One GET per query:
//! `?key=..&radius=10&maxMatches=10&origin=<zip>&ambiguities=ignore&outFormat=json`
//!
//! The JSON body is read through a typed decoder where every per-place field
//! is optional, then shaped into `NearbyPlace` with sentinel fallbacks.
use serde::Deserialize;

use crate::config::PlacesOptions;
use crate::config::consts::{NO_ADDRESS, NO_CATEGORY, NO_CITY};
use crate::core::net::Fetch;
use crate::data::NearbyPlace;
use crate::error::{ApiError, Result};

#[derive(Debug, Deserialize)]
struct RadiusResponse {
    #[serde(rename = "searchResults")]
    search_results: Option<Vec<SearchResult>>,
    info: Option<Info>,
}

#[derive(Debug, Deserialize)]
struct Info {
    #[serde(default)]
    statuscode: i64,
    #[serde(default)]
    messages: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    // absent and `null` both mean "nothing known"
    #[serde(default)]
    fields: Option<Fields>,
}

#[derive(Debug, Default, Deserialize)]
struct Fields {
    name: Option<String>,
    group_sic_code_name: Option<String>,
    address: Option<String>,
    city: Option<String>,
}

pub struct PlacesQuery {
    options: PlacesOptions,
}

impl PlacesQuery {
    pub fn new(options: PlacesOptions) -> Self {
        Self { options }
    }

    pub fn endpoint(&self) -> &str {
        self.options.endpoint.as_str()
    }

    /// Query string for one lookup, in the order the API documents it.
    pub fn params(&self, postal_code: &str) -> Vec<(&'static str, String)> {
        vec![
            ("key", self.options.api_key.clone()),
            ("radius", self.options.radius.to_string()),
            ("maxMatches", self.options.max_matches.to_string()),
            ("origin", s!(postal_code)),
            ("ambiguities", s!("ignore")),
            ("outFormat", s!("json")),
        ]
    }

    pub fn find_nearby(&self, fetch: &dyn Fetch, postal_code: &str) -> Result<Vec<NearbyPlace>> {
        let body = fetch.get(self.endpoint(), &self.params(postal_code))?;
        let places = decode_places(&body)?;
        logf!("{} places near {postal_code}", places.len());
        Ok(places)
    }
}

/// Decode a radius-search body.
pub fn decode_places(body: &str) -> std::result::Result<Vec<NearbyPlace>, ApiError> {
    let resp: RadiusResponse = serde_json::from_str(body)?;

    if let Some(info) = &resp.info {
        if info.statuscode != 0 {
            return Err(ApiError::Status {
                code: info.statuscode,
                messages: info.messages.join("; "),
            });
        }
    }

    let results = resp.search_results.ok_or(ApiError::MissingResults)?;
    Ok(results.into_iter().map(|r| place_from_fields(r.fields.unwrap_or_default())).collect())
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

// The city check decides last: no city means "no city" even when a street
// address is present.
fn place_from_fields(f: Fields) -> NearbyPlace {
    let category = non_empty(f.group_sic_code_name).unwrap_or_else(|| s!(NO_CATEGORY));
    let street = non_empty(f.address);
    let address = match non_empty(f.city) {
        Some(_) => street.unwrap_or_else(|| s!(NO_ADDRESS)),
        None => s!(NO_CITY),
    };

    NearbyPlace {
        name: non_empty(f.name).unwrap_or_default(),
        category,
        address,
    }
}
