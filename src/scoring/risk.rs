use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Upper bound of the overall risk score.
pub const MAX_RISK_SCORE: f64 = 5.0;

/// Qualitative risk band.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    clap::ValueEnum,
)]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weights and thresholds for the overall risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskPolicy {
    /// A breach newer than this many days (relative to the evaluation date)
    /// triggers the recency bonus.
    pub recency_window_days: i64,
    pub recency_bonus: f64,
    /// Multiplier for the fraction of emails seen in two or more breaches.
    pub reuse_weight: f64,
    pub medium_threshold: f64,
    pub high_threshold: f64,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            recency_window_days: 365,
            recency_bonus: 0.5,
            reuse_weight: 1.0,
            medium_threshold: 2.5,
            high_threshold: 4.0,
        }
    }
}

impl RiskPolicy {
    pub fn level_for(&self, score: f64) -> RiskLevel {
        if score >= self.high_threshold {
            RiskLevel::High
        } else if score >= self.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    fn is_recent(&self, latest: Option<NaiveDate>, as_of: NaiveDate) -> bool {
        latest.is_some_and(|date| (as_of - date).num_days() <= self.recency_window_days)
    }
}

/// Inputs of the overall risk computation, already reduced from the record set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskInputs {
    pub record_count: usize,
    pub mean_severity: f64,
    pub latest_breach_date: Option<NaiveDate>,
    /// Fraction (0..=1) of unique emails that appear in two or more sources.
    pub reuse_fraction: f64,
}

/// Contribution of each signal to the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskBreakdown {
    pub mean_severity: f64,
    pub recency_adjustment: f64,
    pub reuse_adjustment: f64,
}

/// Complete overall risk result.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskScore {
    /// Total risk score (0.0-5.0, two decimals)
    pub score: f64,
    pub level: RiskLevel,
    pub breakdown: RiskBreakdown,
}

impl RiskScore {
    pub fn compute(inputs: &RiskInputs, as_of: NaiveDate, policy: &RiskPolicy) -> Self {
        if inputs.record_count == 0 {
            return Self::default();
        }

        let recency_adjustment = if policy.is_recent(inputs.latest_breach_date, as_of) {
            policy.recency_bonus
        } else {
            0.0
        };
        let reuse_adjustment = policy.reuse_weight * inputs.reuse_fraction.clamp(0.0, 1.0);

        let raw = inputs.mean_severity + recency_adjustment + reuse_adjustment;
        let score = round_to(raw.clamp(0.0, MAX_RISK_SCORE), 2);

        RiskScore {
            score,
            level: policy.level_for(score),
            breakdown: RiskBreakdown {
                mean_severity: round_to(inputs.mean_severity, 2),
                recency_adjustment,
                reuse_adjustment: round_to(reuse_adjustment, 2),
            },
        }
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
