//! HTML heuristic analyzer.
//!
//! Operates purely on the document string - no DOM, no browser. Each
//! rule family answers one yes/no question (is there a credential form
//! anywhere, is there an obfuscated script anywhere) and contributes at
//! most one issue, so the verdict stays a clean de-duplicated list no
//! matter how much triggering content the document piles up.
//!
//! Structural statistics (form/script/link/hidden-field counts) are
//! collected unconditionally so callers can always render a summary.

use tracing::debug;

use crate::rules::{
    brand_domain_pattern, CHAR_RUN_THRESHOLD, CREDENTIAL_FORM_TERMS, DANGEROUS_JS_PATTERNS,
    EXTERNAL_LINK_THRESHOLD, HIDDEN_FIELD_THRESHOLD, IMPERSONATED_BRANDS, OBFUSCATED_LINE_LENGTH,
    REDIRECT_PATTERNS, RE_EXTERNAL_ANCHOR, RE_FORM_ACTION, RE_FORM_BLOCK, RE_HIDDEN_INPUT,
    RE_META_REFRESH, RE_SCRIPT_BLOCK, URGENCY_PHRASES,
};
use crate::types::{ContentStats, ContentVerdict};

/// Analyze an HTML document with no known page origin. Form actions
/// pointing at any absolute URL are treated as external.
#[must_use]
pub fn evaluate_html(html: &str) -> ContentVerdict {
    evaluate_html_with_origin(html, None)
}

/// Analyze an HTML document fetched from `origin_host`. Form actions
/// that mention the page's own host are not flagged as external.
#[must_use]
pub fn evaluate_html_with_origin(html: &str, origin_host: Option<&str>) -> ContentVerdict {
    // One lower-cased copy for all phrase/brand checks.
    let lower = html.to_lowercase();

    let forms: Vec<&str> = RE_FORM_BLOCK.find_iter(html).map(|m| m.as_str()).collect();
    let scripts: Vec<&str> = RE_SCRIPT_BLOCK
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect();
    let hidden_fields = RE_HIDDEN_INPUT.find_iter(html).count();
    let external_links = RE_EXTERNAL_ANCHOR.find_iter(html).count();

    let stats = ContentStats {
        forms: forms.len(),
        scripts: scripts.len(),
        external_links,
        hidden_fields,
    };

    let mut issues = Vec::new();

    check_credential_forms(&forms, &mut issues);
    check_hidden_fields(hidden_fields, &mut issues);
    check_external_actions(html, origin_host, &mut issues);
    check_dangerous_scripts(html, &mut issues);
    check_obfuscation(&scripts, &mut issues);
    check_urgency_language(&lower, &mut issues);
    check_brand_impersonation(html, &lower, &mut issues);
    check_redirects(html, &mut issues);
    check_fake_security(html, &lower, &mut issues);
    check_link_farming(external_links, &mut issues);

    debug!(
        issues = issues.len(),
        forms = stats.forms,
        scripts = stats.scripts,
        "HTML analysis complete"
    );
    ContentVerdict::from_issues(issues, stats)
}

/// Any form block containing a credential-related term marks the whole
/// document; further forms add no information.
fn check_credential_forms(forms: &[&str], issues: &mut Vec<String>) {
    for form in forms {
        let form_lower = form.to_lowercase();
        if CREDENTIAL_FORM_TERMS.iter().any(|t| form_lower.contains(t)) {
            issues.push("Contains login/authentication form".to_string());
            return;
        }
    }
}

fn check_hidden_fields(count: usize, issues: &mut Vec<String>) {
    if count > HIDDEN_FIELD_THRESHOLD {
        issues.push(format!("Multiple hidden form fields detected ({count})"));
    }
}

/// A form action carrying a scheme that does not mention the page's own
/// host submits credentials elsewhere. With no origin known, any
/// absolute action URL qualifies.
fn check_external_actions(html: &str, origin_host: Option<&str>, issues: &mut Vec<String>) {
    for caps in RE_FORM_ACTION.captures_iter(html) {
        let Some(action) = caps.get(1) else { continue };
        let action = action.as_str().to_lowercase();
        if !action.contains("http") {
            continue;
        }
        let same_host = origin_host
            .map(|h| action.contains(&h.to_lowercase()))
            .unwrap_or(false);
        if !same_host {
            issues.push("Form submits to external domain".to_string());
            return;
        }
    }
}

/// One combined issue for the whole battery, whichever pattern fired.
fn check_dangerous_scripts(html: &str, issues: &mut Vec<String>) {
    if DANGEROUS_JS_PATTERNS.iter().any(|re| re.is_match(html)) {
        issues.push("Potentially dangerous JavaScript patterns detected".to_string());
    }
}

fn check_obfuscation(scripts: &[&str], issues: &mut Vec<String>) {
    for script in scripts {
        let body = script.trim();
        if body
            .lines()
            .any(|line| line.len() > OBFUSCATED_LINE_LENGTH)
        {
            issues.push("Potentially obfuscated JavaScript code detected".to_string());
            return;
        }
        if has_char_run(body, CHAR_RUN_THRESHOLD) {
            issues.push("Suspicious character repetition in JavaScript".to_string());
            return;
        }
    }
}

/// True when `text` contains `min_run` or more identical consecutive
/// characters. The regex crate has no backreferences, so this is a
/// plain scan.
fn has_char_run(text: &str, min_run: usize) -> bool {
    let mut run = 0usize;
    let mut prev: Option<char> = None;
    for ch in text.chars() {
        if Some(ch) == prev {
            run += 1;
            if run >= min_run {
                return true;
            }
        } else {
            prev = Some(ch);
            run = 1;
        }
    }
    false
}

fn check_urgency_language(lower: &str, issues: &mut Vec<String>) {
    if let Some(phrase) = URGENCY_PHRASES.iter().find(|p| lower.contains(*p)) {
        issues.push(format!("Urgency/pressure language: \"{phrase}\""));
    }
}

/// A brand mention without that brand's canonical domain anywhere in
/// the document suggests the page talks about the brand rather than
/// belonging to it.
fn check_brand_impersonation(html: &str, lower: &str, issues: &mut Vec<String>) {
    for brand in IMPERSONATED_BRANDS {
        if lower.contains(brand) && !brand_domain_pattern(brand).is_match(html) {
            issues.push(format!("Possible impersonation of: {brand}"));
            return;
        }
    }
}

fn check_redirects(html: &str, issues: &mut Vec<String>) {
    if REDIRECT_PATTERNS.iter().any(|re| re.is_match(html)) || RE_META_REFRESH.is_match(html) {
        issues.push("Automatic redirects or location changes detected".to_string());
    }
}

/// Claims of being "secure" plus a lock glyph, with no literal HTTPS
/// reference, imitate browser chrome instead of providing transport
/// security.
fn check_fake_security(html: &str, lower: &str, issues: &mut Vec<String>) {
    if lower.contains("secure") && html.contains('\u{1F512}') && !lower.contains("https://") {
        issues.push("Fake security indicators without HTTPS".to_string());
    }
}

fn check_link_farming(external_links: usize, issues: &mut Vec<String>) {
    if external_links > EXTERNAL_LINK_THRESHOLD {
        issues.push(format!(
            "Excessive external links ({external_links}) - possible link farming"
        ));
    }
}
