//! Remote content fetcher collaborator.
//!
//! The scan orchestrator depends only on the [`Fetch`] contract: give
//! it a URL, get the HTML body back or a descriptive error. The bundled
//! [`HttpFetcher`] tries an ordered list of retrieval routes (direct
//! request first, then public read-through mirrors for pages that
//! refuse direct automated access) with a bounded per-attempt timeout.
//! First success wins; the last error is preserved when every route
//! fails.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

/// Per-attempt timeout. Worst-case fetch latency is bounded by
/// timeout x route count.
const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);

/// Bodies shorter than this are treated as an error page, not content.
const MIN_BODY_LEN: usize = 50;

/// Read-through mirrors tried after the direct request fails. The
/// target URL is appended percent-encoded.
static MIRROR_PREFIXES: &[&str] = &[
    "https://api.allorigins.win/raw?url=",
    "https://thingproxy.freeboard.io/fetch/",
];

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("response from {url} does not look like HTML ({len} bytes)")]
    NotHtml { url: String, len: usize },

    #[error("all {attempts} fetch routes failed; last error: {last}")]
    AllRoutesFailed { attempts: usize, last: String },
}

/// Narrow contract the orchestrator depends on. Implementations decide
/// transport, retries and proxying; the core only sees body-or-error.
pub trait Fetch {
    fn fetch(&self, url: &str) -> impl std::future::Future<Output = Result<String, FetchError>> + Send;
}

/// Production fetcher backed by reqwest.
pub struct HttpFetcher {
    client: reqwest::Client,
    mirrors: Vec<String>,
}

impl HttpFetcher {
    /// Build a fetcher with the default route list and timeout.
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(ATTEMPT_TIMEOUT)
            .user_agent(concat!("phishscan/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Transport {
                url: String::new(),
                message: e.to_string(),
            })?;
        Ok(Self {
            client,
            mirrors: MIRROR_PREFIXES.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Candidate request URLs in attempt order: direct, then mirrors.
    fn routes(&self, url: &str) -> Vec<String> {
        let mut routes = vec![url.to_string()];
        let encoded = percent_encode(url);
        for prefix in &self.mirrors {
            routes.push(format!("{prefix}{encoded}"));
        }
        routes
    }

    async fn attempt(&self, request_url: &str) -> Result<String, FetchError> {
        let response = self.client.get(request_url).send().await.map_err(|e| {
            FetchError::Transport {
                url: request_url.to_string(),
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: request_url.to_string(),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Transport {
            url: request_url.to_string(),
            message: e.to_string(),
        })?;

        validate_body(request_url, body)
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let routes = self.routes(url);
        let attempts = routes.len();
        let mut last: Option<FetchError> = None;

        for route in &routes {
            debug!(route, "attempting fetch");
            match self.attempt(route).await {
                Ok(body) => {
                    debug!(route, bytes = body.len(), "fetch succeeded");
                    return Ok(body);
                }
                Err(err) => {
                    warn!(route, %err, "fetch route failed");
                    last = Some(err);
                }
            }
        }

        Err(FetchError::AllRoutesFailed {
            attempts,
            last: last
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no routes configured".to_string()),
        })
    }
}

/// Reject bodies that are clearly not HTML (tiny error blurbs, JSON
/// wrappers from a broken mirror) so a later mirror gets a chance.
fn validate_body(url: &str, body: String) -> Result<String, FetchError> {
    if body.len() < MIN_BODY_LEN || !body.contains('<') {
        return Err(FetchError::NotHtml {
            url: url.to_string(),
            len: body.len(),
        });
    }
    Ok(body)
}

/// Minimal percent-encoding of a URL embedded as a query value.
fn percent_encode(url: &str) -> String {
    let mut out = String::with_capacity(url.len() * 3 / 2);
    for byte in url.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
