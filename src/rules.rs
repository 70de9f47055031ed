//! Declarative rule tables used by the URL and HTML evaluators.
//!
//! Every heuristic the engine applies is driven by one of the tables in
//! this module: keyword lists, phrase lists, shortener domains, brand
//! names and regex batteries. Keeping them as data rather than inline
//! branches lets each rule be unit tested and extended without touching
//! the evaluator control flow.

use regex::Regex;
use std::sync::LazyLock;

/// Credential/brand keywords that are suspicious inside a domain name.
/// First match wins; order puts the generic credential terms first.
pub static PHISHING_KEYWORDS: &[&str] = &[
    "login",
    "signin",
    "account",
    "verify",
    "update",
    "secure",
    "banking",
    "paypal",
    "amazon",
    "office365",
    "microsoft",
    "chase",
    "wellsfargo",
];

/// Known URL-shortener domains. A hostname matches when it equals the
/// entry or is a subdomain of it.
pub static SHORTENER_DOMAINS: &[&str] =
    &["bit.ly", "tinyurl.com", "goo.gl", "t.co", "is.gd", "ow.ly"];

/// Pressure/urgency phrases matched against the lower-cased document.
/// First match wins and the issue names the phrase.
pub static URGENCY_PHRASES: &[&str] = &[
    "urgent",
    "immediate",
    "action required",
    "account will be suspended",
    "verify now",
    "limited time",
    "your account is on hold",
    "act now",
    "immediate action",
    "time sensitive",
    "expires soon",
    "limited offer",
    "do not ignore",
    "important notice",
    "security alert",
    "account verification",
    "payment required",
    "suspension warning",
];

/// Brands commonly impersonated by credential-harvesting pages.
/// A mention without the brand's canonical domain nearby is flagged.
pub static IMPERSONATED_BRANDS: &[&str] = &[
    "paypal",
    "amazon",
    "office",
    "microsoft",
    "chase",
    "wells fargo",
    "bank of america",
    "citibank",
    "facebook",
    "google",
    "apple",
    "netflix",
    "instagram",
    "linkedin",
    "twitter",
    "yahoo",
];

/// Terms that mark a `<form>` block as a credential form.
pub static CREDENTIAL_FORM_TERMS: &[&str] = &["password", "pass", "pwd", "login", "signin", "auth"];

/// Hidden-field count above which the hidden-field rule fires.
pub const HIDDEN_FIELD_THRESHOLD: usize = 2;

/// External-anchor count above which the link-farming rule fires.
pub const EXTERNAL_LINK_THRESHOLD: usize = 10;

/// Script lines longer than this are treated as likely obfuscation.
pub const OBFUSCATED_LINE_LENGTH: usize = 500;

/// Minimum run of identical consecutive characters that marks a script
/// body as suspicious (10 repeats after the first character).
pub const CHAR_RUN_THRESHOLD: usize = 11;

/// Bounds on the www-stripped domain length considered "usual".
pub const DOMAIN_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 5..=45;

/// Hostname label count (dots + 1) above which the subdomain rule fires.
pub const MAX_HOST_LABELS: usize = 4;

// Pre-compiled regexes. Static patterns are hardcoded and valid.

#[allow(clippy::unwrap_used)]
pub static RE_IPV4_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").unwrap());

#[allow(clippy::unwrap_used)]
pub static RE_FORM_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<form[^>]*>.*?</form>").unwrap());

#[allow(clippy::unwrap_used)]
pub static RE_HIDDEN_INPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<input[^>]*type\s*=\s*["']hidden["'][^>]*>"#).unwrap());

#[allow(clippy::unwrap_used)]
pub static RE_FORM_ACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)action\s*=\s*["']([^"']*)["']"#).unwrap());

#[allow(clippy::unwrap_used)]
pub static RE_SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>(.*?)</script>").unwrap());

#[allow(clippy::unwrap_used)]
pub static RE_EXTERNAL_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a[^>]*href\s*=\s*["']https?://[^"']*["'][^>]*>"#).unwrap()
});

#[allow(clippy::unwrap_used)]
pub static RE_META_REFRESH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)meta[^>]*http-equiv\s*=\s*["']refresh["']"#).unwrap());

/// Battery of script patterns that indicate dynamic-code execution,
/// unsafe DOM writes, base64 chains or string-based timer callbacks.
/// One combined issue fires on the first match, whichever pattern it is.
#[allow(clippy::unwrap_used)]
pub static DANGEROUS_JS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"eval\s*\(",
        r"document\.write\s*\(",
        r"innerHTML\s*=.*\+",
        r"outerHTML\s*=",
        r#"setTimeout\s*\(\s*["'][^"']*javascript:"#,
        r#"setInterval\s*\(\s*["'][^"']*javascript:"#,
        r#"Function\s*\(\s*["']"#,
        r"atob\s*\(",
        r"btoa\s*\(",
        r"unescape\s*\(",
        r"decodeURIComponent\s*\(\s*atob",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Script-based location reassignment patterns. The meta-refresh tag is
/// matched separately by [`RE_META_REFRESH`].
#[allow(clippy::unwrap_used)]
pub static REDIRECT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"window\.location\s*=",
        r"location\.href\s*=.*http",
        r"document\.location\s*=",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Canonical-domain regex for a brand: name with whitespace stripped,
/// a dot, then a common TLD. Used to tell a legitimate mention apart
/// from impersonation.
pub fn brand_domain_pattern(brand: &str) -> Regex {
    let compact: String = brand.split_whitespace().collect();
    // Brand names in the table are plain ASCII words, so the pattern
    // always compiles; fall back to a never-matching pattern anyway.
    Regex::new(&format!(r"(?i){}\.(com|net|org|edu)", regex::escape(&compact)))
        .unwrap_or_else(|_| Regex::new(r"\z.").expect("fallback pattern"))
}
