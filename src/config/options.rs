// src/config/options.rs
use url::Url;

use super::consts::*;
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub site: SiteOptions,
    pub places: PlacesOptions,
}

impl AppOptions {
    /// Build options from the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            logd!("loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build options from an arbitrary key lookup.
    /// `MAPQUEST_API_KEY` is required; URL overrides are optional.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = present(ENV_API_KEY).ok_or(ConfigError::MissingApiKey(ENV_API_KEY))?;

        let mut site = SiteOptions::default();
        if let Some(raw) = present(ENV_NPS_BASE_URL) {
            site.base_url = parse_url(ENV_NPS_BASE_URL, &raw)?;
        }

        let mut places = PlacesOptions::new(api_key);
        if let Some(raw) = present(ENV_PLACES_ENDPOINT) {
            places.endpoint = parse_url(ENV_PLACES_ENDPOINT, &raw)?;
        }

        Ok(Self { site, places })
    }
}

fn parse_url(key: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|source| ConfigError::InvalidUrl { key, source })
}

/// Where the park directory lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteOptions {
    pub base_url: Url,
}

impl SiteOptions {
    /// `{base}/index.htm`. Fails only for a base that cannot carry a path
    /// (e.g. `mailto:` from an `NPS_BASE_URL` override).
    pub fn home_url(&self) -> Result<Url, ConfigError> {
        self.base_url
            .join(NPS_HOME_PATH)
            .map_err(|source| ConfigError::InvalidUrl { key: ENV_NPS_BASE_URL, source })
    }
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            base_url: Url::parse(NPS_BASE_URL).expect("NPS_BASE_URL is a valid URL"),
        }
    }
}

/// Places API access. Radius and match count are fixed by the API contract.
#[derive(Clone, PartialEq, Eq)]
pub struct PlacesOptions {
    pub endpoint: Url,
    pub api_key: String,
    pub radius: u32,
    pub max_matches: u32,
}

impl PlacesOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: Url::parse(PLACES_ENDPOINT).expect("PLACES_ENDPOINT is a valid URL"),
            api_key: api_key.into(),
            radius: PLACES_RADIUS,
            max_matches: PLACES_MAX_MATCHES,
        }
    }
}

// Keep the key out of debug output and logs.
impl std::fmt::Debug for PlacesOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesOptions")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"<redacted>")
            .field("radius", &self.radius)
            .field("max_matches", &self.max_matches)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = AppOptions::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey(ENV_API_KEY)));

        let err = AppOptions::from_lookup(lookup(&[(ENV_API_KEY, "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey(_)));
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let opts = AppOptions::from_lookup(lookup(&[(ENV_API_KEY, "abc123")])).unwrap();
        assert_eq!(opts.places.api_key, "abc123");
        assert_eq!(opts.places.radius, 10);
        assert_eq!(opts.places.max_matches, 10);
        assert_eq!(opts.places.endpoint.as_str(), PLACES_ENDPOINT);
        assert_eq!(opts.site.home_url().unwrap().as_str(), "https://www.nps.gov/index.htm");
    }

    #[test]
    fn url_overrides_are_validated() {
        let opts = AppOptions::from_lookup(lookup(&[
            (ENV_API_KEY, "k"),
            (ENV_NPS_BASE_URL, "http://localhost:8080"),
        ]))
        .unwrap();
        assert_eq!(opts.site.home_url().unwrap().as_str(), "http://localhost:8080/index.htm");

        let err = AppOptions::from_lookup(lookup(&[
            (ENV_API_KEY, "k"),
            (ENV_PLACES_ENDPOINT, "not a url"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { key: ENV_PLACES_ENDPOINT, .. }));
    }

    #[test]
    fn home_url_needs_a_base_with_a_path() {
        let site = SiteOptions { base_url: Url::parse("mailto:parks@example.org").unwrap() };
        let err = site.home_url().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { key: ENV_NPS_BASE_URL, .. }));
    }

    #[test]
    fn debug_output_hides_key() {
        let opts = PlacesOptions::new("secret-key");
        assert!(!format!("{opts:?}").contains("secret-key"));
    }
}
