//! Core verdict and report types - the foundation of phishscan output

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse safety band for a scanned input.
/// - Safe: no heuristic triggered
/// - Suspicious: one or two heuristics triggered (mildly odd)
/// - Danger: three or more heuristics triggered, or unparsable input
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Safe,
    Suspicious,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Suspicious => "suspicious",
            Self::Danger => "danger",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of evaluating a single URL string.
///
/// Invariant: `safe == issues.is_empty()`. Issue order is evaluation
/// order, not sorted - the first-triggered issue is usually the most
/// diagnostic one and callers may render only the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlVerdict {
    /// The URL as supplied by the caller
    pub url: String,
    /// True when no heuristic triggered
    pub safe: bool,
    /// True when the issue count is in the "mildly odd" band (1..=2)
    pub suspicious: bool,
    /// Human-readable descriptions of every triggered heuristic
    pub issues: Vec<String>,
}

impl UrlVerdict {
    /// Build a verdict from the collected issue list, deriving the
    /// safe/suspicious flags.
    #[must_use]
    pub fn from_issues(url: &str, issues: Vec<String>) -> Self {
        let safe = issues.is_empty();
        let suspicious = !safe && issues.len() <= 2;
        Self {
            url: url.to_string(),
            safe,
            suspicious,
            issues,
        }
    }

    /// Verdict for input that failed URL parsing. Malformed input is a
    /// finding, not an error - note `suspicious` stays false here.
    #[must_use]
    pub fn invalid(url: &str) -> Self {
        Self {
            url: url.to_string(),
            safe: false,
            suspicious: false,
            issues: vec!["Invalid URL format".to_string()],
        }
    }

    /// Coarse band for presentation
    #[must_use]
    pub fn severity(&self) -> Severity {
        if self.safe {
            Severity::Safe
        } else if self.suspicious {
            Severity::Suspicious
        } else {
            Severity::Danger
        }
    }
}

/// Structural counters collected during HTML analysis.
///
/// Populated unconditionally, even for a fully safe document, so a
/// caller can always render a structural summary.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentStats {
    /// `<form>` blocks found
    pub forms: usize,
    /// `<script>` blocks found
    pub scripts: usize,
    /// Anchor tags whose href is an absolute http(s) URL
    pub external_links: usize,
    /// Hidden-type input tags
    pub hidden_fields: usize,
}

/// Result of analyzing one HTML document string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentVerdict {
    /// True when no heuristic triggered
    pub safe: bool,
    /// Human-readable descriptions of every triggered heuristic,
    /// at most one per rule family, in evaluation order
    pub issues: Vec<String>,
    /// Structural counters, always populated
    pub stats: ContentStats,
}

impl ContentVerdict {
    #[must_use]
    pub fn from_issues(issues: Vec<String>, stats: ContentStats) -> Self {
        Self {
            safe: issues.is_empty(),
            issues,
            stats,
        }
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        if self.safe {
            Severity::Safe
        } else {
            Severity::Danger
        }
    }
}

/// Merged output of a full scan: URL heuristics plus fetched-content
/// heuristics. Produced only when the fetch succeeded - a failed fetch
/// surfaces as `ScanError::Fetch`, never as a partial report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Timestamp when the scan was performed
    pub scan_timestamp: DateTime<Utc>,
    /// Verdict for the URL string itself
    pub url_verdict: UrlVerdict,
    /// Verdict for the fetched HTML body
    pub content_verdict: ContentVerdict,
    /// Size of the fetched body in bytes
    pub fetched_length: usize,
}

impl ScanReport {
    #[must_use]
    pub fn new(
        url_verdict: UrlVerdict,
        content_verdict: ContentVerdict,
        fetched_length: usize,
    ) -> Self {
        Self {
            scan_timestamp: Utc::now(),
            url_verdict,
            content_verdict,
            fetched_length,
        }
    }

    /// True when neither verdict carries issues
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.url_verdict.safe && self.content_verdict.safe
    }

    /// Total issue count across both verdicts
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.url_verdict.issues.len() + self.content_verdict.issues.len()
    }
}
