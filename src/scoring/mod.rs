//! Severity and risk scoring.
//!
//! Each exposure record gets a severity in `1.0..=5.0` from the categories of
//! data it exposed. The whole result set gets a risk score combining the mean
//! severity, a recency bonus and a password-reuse adjustment.

pub mod risk;
pub mod severity;

pub use risk::{
    MAX_RISK_SCORE, RiskBreakdown, RiskInputs, RiskLevel, RiskPolicy, RiskScore, round_to,
};
pub use severity::{FieldWeights, MAX_SEVERITY, MIN_SEVERITY};
