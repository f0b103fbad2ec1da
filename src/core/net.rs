// src/core/net.rs
// Blocking HTTP GET behind the `Fetch` seam.

use std::{cell::RefCell, collections::HashMap, time::Duration};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::FetchError;

/// One GET returning the body as text.
/// `query` pairs are appended to `url` as a URL-encoded query string.
pub trait Fetch {
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String, FetchError>;
}

/// The live client. One request per call, no retries.
pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| FetchError::Transport { url: s!("<client setup>"), source })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpClient {
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String, FetchError> {
        // query may carry the API key: log the bare URL only, and strip the
        // request URL from reqwest errors before they reach a message
        logd!("GET {url}");

        let resp = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|source| FetchError::Transport { url: s!(url), source: source.without_url() })?;

        let status = resp.status();
        if !status.is_success() {
            logw!("HTTP {status} from {url}");
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }

        resp.text()
            .map_err(|source| FetchError::Body { url: s!(url), source: source.without_url() })
    }
}

/// A request seen by `StaticPages`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    pub query: Vec<(String, String)>,
}

/// In-memory pages keyed by URL, for running the scrapers offline against
/// captured fixtures. Every call is recorded.
#[derive(Default)]
pub struct StaticPages {
    pages: HashMap<String, String>,
    requests: RefCell<Vec<Request>>,
}

impl StaticPages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(url, body);
        self
    }

    pub fn insert(&mut self, url: impl Into<String>, body: impl Into<String>) {
        self.pages.insert(url.into(), body.into());
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    /// Number of requests made for `url`, regardless of query.
    pub fn hits(&self, url: &str) -> usize {
        self.requests.borrow().iter().filter(|r| r.url == url).count()
    }
}

impl Fetch for StaticPages {
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(Request {
            url: s!(url),
            query: query.iter().map(|(k, v)| (s!(*k), v.clone())).collect(),
        });
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(s!(url)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn static_pages_records_requests_and_misses() {
        let pages = StaticPages::new().with("https://example.org/a", "A");

        assert_eq!(pages.get("https://example.org/a", &[]).unwrap(), "A");
        let err = pages
            .get("https://example.org/b", &[("k", s!("v"))])
            .unwrap_err();
        assert!(matches!(err, FetchError::NotFound(ref u) if u == "https://example.org/b"));

        let reqs = pages.requests();
        assert_eq!(reqs.len(), 2);
        assert_eq!(reqs[1].query, vec![(s!("k"), s!("v"))]);
        assert_eq!(pages.hits("https://example.org/a"), 1);
    }

    #[test]
    fn transport_errors_do_not_echo_the_query() {
        // bind then drop: nothing listens on the port afterwards
        let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let url = format!("http://127.0.0.1:{port}/search");

        let client = HttpClient::new().unwrap();
        let err = client
            .get(&url, &[("key", s!("SUPERSECRETKEY")), ("origin", s!("49931"))])
            .unwrap_err();

        assert!(matches!(err, FetchError::Transport { .. }));
        let shown = err.to_string();
        assert!(shown.contains(&url));
        assert!(!shown.contains("SUPERSECRETKEY"));
        assert!(!format!("{err:?}").contains("SUPERSECRETKEY"));
    }
}
