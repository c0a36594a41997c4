use crate::error::TrackerError;
use crate::scoring::RiskLevel;
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

#[derive(Parser, Debug)]
#[command(
    name = "breach-tracker",
    version,
    about = "Breach & credential exposure tracker",
    long_about = "breach-tracker matches a domain or a list of email addresses against an offline breach dataset, \
scores each exposure by the data it leaked, and writes CSV, JSON and Markdown reports. \
Use fictional or authorized data only."
)]
pub struct Cli {
    /// Target domain (e.g. example.com)
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Target email address (repeatable)
    #[arg(short, long = "email")]
    pub emails: Vec<String>,

    /// File with one target email per line
    #[arg(long)]
    pub emails_file: Option<PathBuf>,

    /// Offline breach CSV (email,source,breach_date,compromised_data[,password_hash])
    #[arg(long, default_value = "sample_data/sample_breaches.csv")]
    pub offline: PathBuf,

    /// Directory for exposed_accounts.csv, results.json and report.md
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output format printed to stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Maximum live lookups (0 = offline only; overrides config)
    #[arg(long)]
    pub max_lookups: Option<usize>,

    /// Rows in the example exposures list (overrides config)
    #[arg(long)]
    pub sample_limit: Option<usize>,

    /// Evaluation date for recency scoring (default: today, UTC)
    #[arg(long, value_parser = parse_date)]
    pub as_of: Option<NaiveDate>,

    /// Exit with code 1 when the overall risk level reaches this level
    #[arg(long, value_enum)]
    pub fail_on: Option<RiskLevel>,

    /// Configuration file (YAML, JSON or TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write a commented config template to .breach-tracker.yaml and exit
    #[arg(long)]
    pub init_config: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| TrackerError::InvalidDate(value.to_string()).to_string())
}
