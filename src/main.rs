use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use phishscan::cli::{Args, Command, OutputFormat};
use phishscan::fetch::HttpFetcher;
use phishscan::output;
use phishscan::{evaluate_html, evaluate_url, full_scan};

fn read_html_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading HTML from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading HTML file '{input}'"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Use RUST_LOG env var if set, otherwise the verbose flag.
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if args.verbose {
        EnvFilter::new("phishscan=debug")
    } else {
        EnvFilter::new("phishscan=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    debug!("Logging initialized (verbose={})", args.verbose);

    let rendered = match &args.command {
        Command::Url { url } => {
            let verdict = evaluate_url(url);
            match args.format {
                OutputFormat::Json => output::to_json(&verdict)?,
                OutputFormat::Terminal => output::format_url_verdict(&verdict),
            }
        }
        Command::Html { input } => {
            let html = read_html_input(input)?;
            let verdict = evaluate_html(&html);
            match args.format {
                OutputFormat::Json => output::to_json(&verdict)?,
                OutputFormat::Terminal => output::format_content_verdict(&verdict),
            }
        }
        Command::Scan { url } => {
            let fetcher = HttpFetcher::new().context("building HTTP fetcher")?;
            let report = full_scan(url, &fetcher).await?;
            match args.format {
                OutputFormat::Json => output::to_json(&report)?,
                OutputFormat::Terminal => output::format_report(&report),
            }
        }
    };

    output::emit(&rendered, args.output.as_deref())
}
