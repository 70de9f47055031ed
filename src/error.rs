use thiserror::Error;

use crate::fetch::FetchError;

/// Errors surfaced by the full-scan orchestrator.
///
/// The evaluators themselves never fail - malformed URLs become a
/// finding inside the verdict. Only the orchestrator's I/O step is
/// allowed to leave the evaluate layer as an error.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The URL is not syntactically parsable, so there is nothing to
    /// fetch. Raised before the fetcher is invoked.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The fetcher exhausted its route list; carries the last
    /// underlying error's message. No partial analysis is returned.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

impl ScanError {
    pub fn invalid_url<S1: Into<String>, S2: Into<String>>(url: S1, reason: S2) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
