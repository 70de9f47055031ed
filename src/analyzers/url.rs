//! URL heuristic evaluator.
//!
//! Inspects a single URL string for phishing-shaped structure: insecure
//! scheme, raw IP hosts, shortener domains, subdomain stuffing, odd
//! domain lengths and credential/brand keywords. All checks except the
//! keyword scan are independent - every one that matches contributes an
//! issue, in a fixed order.

use tracing::debug;
use url::Url;

use crate::rules::{
    DOMAIN_LENGTH_RANGE, MAX_HOST_LABELS, PHISHING_KEYWORDS, RE_IPV4_HOST, SHORTENER_DOMAINS,
};
use crate::types::UrlVerdict;

/// Evaluate a URL string. Never fails: an unparsable URL (or one with
/// no host, like `mailto:`) is itself reported as an issue.
#[must_use]
pub fn evaluate_url(raw: &str) -> UrlVerdict {
    let parsed = match Url::parse(raw.trim()) {
        Ok(u) => u,
        Err(err) => {
            debug!(url = raw, %err, "URL failed to parse");
            return UrlVerdict::invalid(raw);
        }
    };

    let Some(hostname) = parsed.host_str().map(str::to_lowercase) else {
        debug!(url = raw, "URL has no host component");
        return UrlVerdict::invalid(raw);
    };

    let domain = hostname.strip_prefix("www.").unwrap_or(&hostname);
    let mut issues = Vec::new();

    if parsed.scheme() != "https" {
        issues.push("Insecure protocol (not HTTPS)".to_string());
    }

    if RE_IPV4_HOST.is_match(&hostname) {
        issues.push("Uses raw IP address".to_string());
    }

    if is_shortener(&hostname) {
        issues.push("Uses URL shortener".to_string());
    }

    if hostname.split('.').count() > MAX_HOST_LABELS {
        issues.push("Excessive subdomains".to_string());
    }

    if !DOMAIN_LENGTH_RANGE.contains(&domain.len()) {
        issues.push("Unusual domain length".to_string());
    }

    // The keyword family short-circuits: only the first matching
    // keyword is reported.
    if let Some(kw) = PHISHING_KEYWORDS.iter().find(|kw| domain.contains(*kw)) {
        issues.push(format!("Suspicious keyword in domain: {kw}"));
    }

    UrlVerdict::from_issues(raw, issues)
}

/// Hostname equals a known shortener domain or sits under one.
fn is_shortener(hostname: &str) -> bool {
    SHORTENER_DOMAINS
        .iter()
        .any(|s| hostname == *s || hostname.ends_with(&format!(".{s}")))
}
