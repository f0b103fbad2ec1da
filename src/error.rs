// src/error.rs
//! Error taxonomy.
//!
//! Each stage has its own error type; `Error` folds them together for callers
//! that only need to report.
use thiserror::Error;

/// Network or transport failure.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("could not read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("no page stored for {0}")]
    NotFound(String),
}

/// An element the page is expected to carry was not there.
#[derive(Debug, Error)]
#[error("{what} not found on {page}")]
pub struct ParseError {
    pub page: String,
    pub what: &'static str,
}

impl ParseError {
    pub fn new(page: impl Into<String>, what: &'static str) -> Self {
        Self { page: page.into(), what }
    }
}

/// The places API answered with something we cannot use.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("undecodable places response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("places response has no searchResults")]
    MissingResults,

    #[error("places API status {code}: {messages}")]
    Status { code: i64, messages: String },
}

/// The user typed something the current prompt does not accept.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Enter proper state name")]
    UnknownState(String),

    #[error("Invalid Input")]
    InvalidSelection { input: String, len: usize },

    #[error("Input is not valid UTF-8 text")]
    NotText,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set (add it to the environment or a .env file)")]
    MissingApiKey(&'static str),

    #[error("{key} is not a valid URL: {source}")]
    InvalidUrl {
        key: &'static str,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
