//! Configuration for breach-tracker.
//!
//! - `types`: Configuration type definitions
//! - `loading`: File discovery and parsing
//! - `template`: Commented YAML template for `--init-config`

mod error;
mod loading;
mod template;
mod types;

pub use error::ConfigError;
pub use loading::PROJECT_CONFIG_FILES;
pub use types::{Config, EnrichmentConfig, ReportConfig, ScoringConfig};
