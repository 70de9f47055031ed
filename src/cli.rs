use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "phishscan")]
#[command(about = "Heuristic phishing risk scanner for URLs and HTML documents")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format (json, terminal)
    #[arg(short, long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Write output to file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a URL string without fetching anything
    Url {
        /// URL to evaluate
        url: String,
    },

    /// Analyze an HTML document from a file ("-" reads stdin)
    Html {
        /// Path to the HTML file, or "-" for stdin
        input: String,
    },

    /// Full scan: evaluate the URL, fetch the page, analyze its content
    Scan {
        /// URL to fetch and analyze
        url: String,
    },
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output for machine consumption
    Json,
    /// Human-readable terminal output
    Terminal,
}
