//! Configuration type definitions.

use crate::aggregator::DEFAULT_SAMPLE_LIMIT;
use crate::scoring::{FieldWeights, RiskPolicy};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Main configuration structure for breach-tracker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Per-field severity points.
    pub scoring: ScoringConfig,
    /// Overall risk weights and label thresholds.
    pub risk: RiskPolicy,
    /// Report rendering limits.
    pub report: ReportConfig,
    /// Live lookup settings.
    pub enrichment: EnrichmentConfig,
}

impl Config {
    /// Reject settings that would break severity monotonicity or label ordering.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(field) = self.scoring.field_weights.first_invalid() {
            return Err(ConfigError::InvalidValue {
                field: format!("scoring.field_weights.{}", field),
                message: "weights must be finite and non-negative".to_string(),
            });
        }

        let risk = &self.risk;
        for (name, value) in [
            ("risk.recency_bonus", risk.recency_bonus),
            ("risk.reuse_weight", risk.reuse_weight),
            ("risk.medium_threshold", risk.medium_threshold),
            ("risk.high_threshold", risk.high_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: name.to_string(),
                    message: format!("must be finite and non-negative, got {}", value),
                });
            }
        }

        if risk.medium_threshold > risk.high_threshold {
            return Err(ConfigError::InvalidValue {
                field: "risk.medium_threshold".to_string(),
                message: format!(
                    "must not exceed risk.high_threshold ({} > {})",
                    risk.medium_threshold, risk.high_threshold
                ),
            });
        }

        if risk.recency_window_days < 0 {
            return Err(ConfigError::InvalidValue {
                field: "risk.recency_window_days".to_string(),
                message: format!("must not be negative, got {}", risk.recency_window_days),
            });
        }

        Ok(())
    }
}

/// Severity scoring configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub field_weights: FieldWeights,
}

/// Report rendering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Raw records listed in the example exposures table.
    pub sample_limit: usize,
    /// Breaches shown in the Markdown and terminal rankings (0 = all).
    pub top_breaches: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sample_limit: DEFAULT_SAMPLE_LIMIT,
            top_breaches: 25,
        }
    }
}

/// Live breach lookup configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Maximum number of emails looked up per run (0 = offline only).
    pub max_lookups: usize,
    /// Delay between consecutive requests in milliseconds.
    pub pace_ms: u64,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            max_lookups: 0,
            pace_ms: 1600,
            api_key_env: "HIBP_API_KEY".to_string(),
            base_url: "https://haveibeenpwned.com/api/v3".to_string(),
            user_agent: concat!("breach-tracker/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
        }
    }
}
