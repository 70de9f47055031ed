//! Output formatting and reporting.
//!
//! Formats verdicts and scan reports for two consumers:
//! - Human-readable terminal output with colors
//! - JSON output for machine consumption
//!
//! No decision logic lives here; everything shown is read off the
//! typed values produced by the evaluators and the orchestrator.

use anyhow::Result;
use colored::Colorize;

use crate::types::{ContentVerdict, ScanReport, Severity, UrlVerdict};

fn severity_banner(severity: Severity) -> String {
    match severity {
        Severity::Safe => "SAFE".green().bold().to_string(),
        Severity::Suspicious => "SUSPICIOUS".yellow().bold().to_string(),
        Severity::Danger => "DANGER".red().bold().to_string(),
    }
}

fn push_issue_lines(out: &mut String, issues: &[String]) {
    for issue in issues {
        out.push_str(&format!("  {} {}\n", "-".dimmed(), issue));
    }
}

/// Render a URL verdict for the terminal.
pub fn format_url_verdict(verdict: &UrlVerdict) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        severity_banner(verdict.severity()),
        verdict.url.bold()
    ));

    if verdict.safe {
        out.push_str("  No URL heuristics triggered.\n");
    } else {
        push_issue_lines(&mut out, &verdict.issues);
    }
    out
}

/// Render a content verdict, including the structural summary that is
/// populated even for safe documents.
pub fn format_content_verdict(verdict: &ContentVerdict) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", severity_banner(verdict.severity())));

    if verdict.safe {
        out.push_str("  No content heuristics triggered.\n");
    } else {
        push_issue_lines(&mut out, &verdict.issues);
    }

    out.push_str(&format!("\n{}\n", "Content statistics".bold()));
    out.push_str(&format!("  forms:          {}\n", verdict.stats.forms));
    out.push_str(&format!("  scripts:        {}\n", verdict.stats.scripts));
    out.push_str(&format!(
        "  external links: {}\n",
        verdict.stats.external_links
    ));
    out.push_str(&format!(
        "  hidden fields:  {}\n",
        verdict.stats.hidden_fields
    ));
    out
}

/// Render a merged scan report. URL and content issues stay under
/// separate labeled sections, each preserving its own evaluation order.
pub fn format_report(report: &ScanReport) -> String {
    let mut out = String::new();

    let headline = if report.is_clean() {
        "No phishing indicators detected".green().bold().to_string()
    } else {
        format!(
            "{} ({} issue{})",
            "Potential phishing detected".red().bold(),
            report.issue_count(),
            if report.issue_count() == 1 { "" } else { "s" }
        )
    };
    out.push_str(&format!("{headline}\n"));
    out.push_str(&format!(
        "Analyzed {} bytes fetched from {}\n",
        report.fetched_length,
        report.url_verdict.url.bold()
    ));

    if !report.url_verdict.safe {
        out.push_str(&format!("\n{}\n", "URL issues".underline()));
        push_issue_lines(&mut out, &report.url_verdict.issues);
    }
    if !report.content_verdict.safe {
        out.push_str(&format!("\n{}\n", "Content issues".underline()));
        push_issue_lines(&mut out, &report.content_verdict.issues);
    }

    out.push_str(&format!("\n{}\n", "Content statistics".bold()));
    out.push_str(&format!(
        "  forms:          {}\n",
        report.content_verdict.stats.forms
    ));
    out.push_str(&format!(
        "  scripts:        {}\n",
        report.content_verdict.stats.scripts
    ));
    out.push_str(&format!(
        "  external links: {}\n",
        report.content_verdict.stats.external_links
    ));
    out.push_str(&format!(
        "  hidden fields:  {}\n",
        report.content_verdict.stats.hidden_fields
    ));
    out
}

/// Serialize any of the verdict/report types as pretty JSON.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write rendered output to a file or stdout.
pub fn emit(rendered: &str, output_path: Option<&str>) -> Result<()> {
    match output_path {
        Some(path) => {
            std::fs::write(path, rendered)?;
            eprintln!("Output written to {path}");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContentStats;

    fn sample_report(clean: bool) -> ScanReport {
        let (url_issues, content_issues) = if clean {
            (vec![], vec![])
        } else {
            (
                vec!["Insecure protocol (not HTTPS)".to_string()],
                vec!["Contains login/authentication form".to_string()],
            )
        };
        ScanReport::new(
            UrlVerdict::from_issues("http://example.com", url_issues),
            ContentVerdict::from_issues(
                content_issues,
                ContentStats {
                    forms: 1,
                    scripts: 2,
                    external_links: 3,
                    hidden_fields: 0,
                },
            ),
            1024,
        )
    }

    #[test]
    fn test_report_sections_are_labeled() {
        colored::control::set_override(false);
        let rendered = format_report(&sample_report(false));
        assert!(rendered.contains("URL issues"));
        assert!(rendered.contains("Content issues"));
        assert!(rendered.contains("Insecure protocol (not HTTPS)"));
        assert!(rendered.contains("Contains login/authentication form"));
    }

    #[test]
    fn test_clean_report_omits_issue_sections() {
        colored::control::set_override(false);
        let rendered = format_report(&sample_report(true));
        assert!(rendered.contains("No phishing indicators detected"));
        assert!(!rendered.contains("URL issues"));
        assert!(!rendered.contains("Content issues"));
        // Statistics render regardless
        assert!(rendered.contains("external links: 3"));
    }

    #[test]
    fn test_content_verdict_always_shows_stats() {
        colored::control::set_override(false);
        let v = ContentVerdict::from_issues(vec![], ContentStats::default());
        let rendered = format_content_verdict(&v);
        assert!(rendered.contains("Content statistics"));
        assert!(rendered.contains("forms:          0"));
    }

    #[test]
    fn test_json_round_trips_report() {
        let report = sample_report(false);
        let json = to_json(&report).unwrap();
        let back: ScanReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.fetched_length, 1024);
        assert_eq!(back.url_verdict.issues, report.url_verdict.issues);
    }
}
