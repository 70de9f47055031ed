//! Full-scan orchestrator.
//!
//! The only component that performs I/O. Runs the URL evaluator and the
//! remote fetch concurrently, then analyzes the retrieved body and
//! merges both verdicts into a [`ScanReport`]. Dropping the returned
//! future abandons the pending fetch; there is nothing else to unwind.

use tracing::{debug, info};
use url::Url;

use crate::analyzers::{evaluate_html_with_origin, evaluate_url};
use crate::error::ScanError;
use crate::fetch::Fetch;
use crate::types::ScanReport;

/// Scan a URL end to end: URL heuristics plus fetched-content
/// heuristics.
///
/// Fails fast on a syntactically invalid URL without touching the
/// fetcher, and fails with [`ScanError::Fetch`] when every retrieval
/// route is exhausted - never with a partial report built from an
/// empty document.
pub async fn full_scan<F: Fetch>(raw_url: &str, fetcher: &F) -> Result<ScanReport, ScanError> {
    let raw_url = raw_url.trim();
    let parsed =
        Url::parse(raw_url).map_err(|e| ScanError::invalid_url(raw_url, e.to_string()))?;
    if parsed.host_str().is_none() {
        return Err(ScanError::invalid_url(raw_url, "URL has no host"));
    }

    debug!(url = raw_url, "starting full scan");

    // The URL evaluation is pure and instantaneous; issuing it
    // alongside the fetch keeps the scan bottlenecked on I/O only.
    let (url_verdict, body) = tokio::join!(
        async { evaluate_url(raw_url) },
        fetcher.fetch(parsed.as_str()),
    );
    let body = body?;

    let origin_host = parsed.host_str();
    let content_verdict = evaluate_html_with_origin(&body, origin_host);

    let report = ScanReport::new(url_verdict, content_verdict, body.len());
    info!(
        url = raw_url,
        fetched_bytes = report.fetched_length,
        issues = report.issue_count(),
        clean = report.is_clean(),
        "scan complete"
    );
    Ok(report)
}
