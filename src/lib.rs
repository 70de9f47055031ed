//! phishscan - heuristic phishing risk scanner for URLs and HTML documents.
//!
//! Applies a fixed, auditable set of pattern rules to a URL string
//! and/or an HTML document string and produces a structured verdict:
//! the list of triggered issues plus a coarse safe/suspicious/danger
//! classification. The rules make no claim of statistical accuracy;
//! they exist to surface the classic phishing tells (credential forms,
//! shortener domains, urgency language, obfuscated scripts) for a human
//! to review.
//!
//! # Example
//!
//! ```
//! use phishscan::{evaluate_url, evaluate_html};
//!
//! let verdict = evaluate_url("http://bit.ly/win-a-prize");
//! assert!(!verdict.safe);
//! for issue in &verdict.issues {
//!     println!("- {issue}");
//! }
//!
//! let content = evaluate_html(r#"<form><input type="password"></form>"#);
//! assert!(!content.safe);
//! assert_eq!(content.stats.forms, 1);
//! ```
//!
//! Full scans fetch the page first and need a [`fetch::Fetch`]
//! implementation plus an async runtime:
//!
//! ```no_run
//! # async fn run() -> Result<(), phishscan::ScanError> {
//! use phishscan::{full_scan, fetch::HttpFetcher};
//!
//! let fetcher = HttpFetcher::new()?;
//! let report = full_scan("https://example.com", &fetcher).await?;
//! println!("clean: {}", report.is_clean());
//! # Ok(())
//! # }
//! ```

pub mod analyzers;
pub mod cli;
pub mod error;
pub mod fetch;
pub mod output;
pub mod rules;
pub mod scan;
pub mod types;

// Re-export the caller-facing surface at the crate root.
pub use analyzers::{evaluate_html, evaluate_html_with_origin, evaluate_url};
pub use error::ScanError;
pub use scan::full_scan;
pub use types::{ContentStats, ContentVerdict, ScanReport, Severity, UrlVerdict};
