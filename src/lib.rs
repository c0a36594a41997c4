pub mod aggregator;
pub mod cli;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod exposure;
pub mod filter;
pub mod handlers;
pub mod input;
pub mod output;
pub mod reporter;
pub mod run;
pub mod scoring;

#[cfg(test)]
pub mod test_utils;

pub use aggregator::{BreachSummary, OverallResult, ResultBuilder};
pub use cli::{Cli, OutputFormat};
pub use config::{Config, ConfigError};
pub use enrichment::{EnrichmentError, EnrichmentProvider, HibpProvider};
pub use error::{Result, TrackerError};
pub use exposure::{DataField, ExposureRecord};
pub use filter::TargetFilter;
pub use input::{load_dataset, load_records, read_emails_file};
pub use output::{OutputFormatter, write_outputs};
pub use reporter::{
    Reporter, json::JsonReporter, markdown::MarkdownReporter, terminal::TerminalReporter,
};
pub use run::{Analysis, AnalysisOptions, analyze};
pub use scoring::{FieldWeights, RiskLevel, RiskPolicy, RiskScore};
