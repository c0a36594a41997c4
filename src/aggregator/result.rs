//! Overall result builder.

use super::collector::ExposureCollector;
use super::summary::{BreachSummary, summarize};
use crate::exposure::ExposureRecord;
use crate::scoring::{FieldWeights, RiskBreakdown, RiskInputs, RiskLevel, RiskPolicy, RiskScore};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default number of raw records carried in `sample_exposures`.
pub const DEFAULT_SAMPLE_LIMIT: usize = 15;

/// Top-level report object for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallResult {
    pub generated_at: String,
    pub total_exposed_accounts: usize,
    pub unique_emails: usize,
    pub distinct_breaches: usize,
    pub emails_in_multiple_breaches: usize,
    pub overall_risk_score: f64,
    pub risk_level: RiskLevel,
    pub risk_breakdown: RiskBreakdown,
    #[serde(default)]
    pub enriched_records: usize,
    pub breach_summaries: Vec<BreachSummary>,
    pub sample_exposures: Vec<ExposureRecord>,
}

impl OverallResult {
    pub fn is_empty(&self) -> bool {
        self.total_exposed_accounts == 0
    }
}

/// Builder for creating an [`OverallResult`] from matched records.
#[derive(Debug)]
pub struct ResultBuilder {
    collector: ExposureCollector,
    weights: FieldWeights,
    policy: RiskPolicy,
    as_of: NaiveDate,
    generated_at: String,
    sample_limit: usize,
    enriched_records: usize,
}

impl ResultBuilder {
    /// Create a builder evaluating recency against `as_of`.
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            collector: ExposureCollector::new(),
            weights: FieldWeights::default(),
            policy: RiskPolicy::default(),
            as_of,
            generated_at: String::new(),
            sample_limit: DEFAULT_SAMPLE_LIMIT,
            enriched_records: 0,
        }
    }

    /// Add matched records.
    pub fn with_records(mut self, records: impl IntoIterator<Item = ExposureRecord>) -> Self {
        self.collector.add_all(records);
        self
    }

    /// Add records supplied by an enrichment provider.
    pub fn with_enriched(mut self, records: Vec<ExposureRecord>) -> Self {
        self.enriched_records += records.len();
        self.collector.add_all(records);
        self
    }

    pub fn with_weights(mut self, weights: FieldWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_policy(mut self, policy: RiskPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_generated_at(mut self, generated_at: impl Into<String>) -> Self {
        self.generated_at = generated_at.into();
        self
    }

    pub fn with_sample_limit(mut self, limit: usize) -> Self {
        self.sample_limit = limit;
        self
    }

    /// Build the result, returning the merged record list alongside it.
    pub fn build(self) -> (OverallResult, Vec<ExposureRecord>) {
        let collector = self.collector;
        let breach_summaries = summarize(&collector, &self.weights, &self.policy);

        let total = collector.total();
        let mean_severity = if total == 0 {
            0.0
        } else {
            collector
                .records()
                .iter()
                .map(|r| self.weights.record_severity(r))
                .sum::<f64>()
                / total as f64
        };

        let risk = RiskScore::compute(
            &RiskInputs {
                record_count: total,
                mean_severity,
                latest_breach_date: collector.latest_breach_date(),
                reuse_fraction: collector.reuse_fraction(),
            },
            self.as_of,
            &self.policy,
        );

        let result = OverallResult {
            generated_at: self.generated_at,
            total_exposed_accounts: total,
            unique_emails: collector.unique_emails(),
            distinct_breaches: collector.distinct_sources(),
            emails_in_multiple_breaches: collector.emails_in_multiple_breaches(),
            overall_risk_score: risk.score,
            risk_level: risk.level,
            risk_breakdown: risk.breakdown,
            enriched_records: self.enriched_records,
            breach_summaries,
            sample_exposures: collector
                .records()
                .iter()
                .take(self.sample_limit)
                .cloned()
                .collect(),
        };

        (result, collector.into_records())
    }
}
