// src/config/consts.rs

// NPS site
pub const NPS_BASE_URL: &str = "https://www.nps.gov";
pub const NPS_HOME_PATH: &str = "/index.htm";

// Places API
pub const PLACES_ENDPOINT: &str = "http://www.mapquestapi.com/search/v2/radius";
pub const PLACES_RADIUS: u32 = 10;
pub const PLACES_MAX_MATCHES: u32 = 10;

// Sentinels for missing place fields
pub const NO_CATEGORY: &str = "no category";
pub const NO_ADDRESS: &str = "no address";
pub const NO_CITY: &str = "no city";

// Environment
pub const ENV_API_KEY: &str = "MAPQUEST_API_KEY";
pub const ENV_NPS_BASE_URL: &str = "NPS_BASE_URL";
pub const ENV_PLACES_ENDPOINT: &str = "MAPQUEST_ENDPOINT";

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("nps_scrape/", env!("CARGO_PKG_VERSION"));

// Logging
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_FILTER: &str = "nps_scrape=debug";
