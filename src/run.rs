//! End-to-end analysis: filter, merge, aggregate and score.

use crate::aggregator::{OverallResult, ResultBuilder};
use crate::config::Config;
use crate::exposure::ExposureRecord;
use crate::filter::TargetFilter;
use crate::scoring::{FieldWeights, RiskPolicy};
use chrono::{NaiveDate, SecondsFormat, Utc};
use std::collections::BTreeSet;
use tracing::debug;

/// Inputs to [`analyze`] that do not come from the dataset.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub as_of: NaiveDate,
    pub generated_at: String,
    pub weights: FieldWeights,
    pub policy: RiskPolicy,
    pub sample_limit: usize,
}

impl AnalysisOptions {
    /// Options from a loaded config, stamped with the current UTC time.
    pub fn from_config(config: &Config, as_of: NaiveDate) -> Self {
        Self {
            as_of,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            weights: config.scoring.field_weights.clone(),
            policy: config.risk.clone(),
            sample_limit: config.report.sample_limit,
        }
    }
}

/// Output of one analysis run.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Filtered dataset records followed by enrichment records.
    pub matched: Vec<ExposureRecord>,
    pub result: OverallResult,
}

/// Emails to look up live: dataset emails matching the filter plus the
/// explicit targets, sorted and deduplicated.
pub fn lookup_targets(dataset: &[ExposureRecord], filter: &TargetFilter) -> BTreeSet<String> {
    let mut targets = filter.emails().clone();
    targets.extend(
        dataset
            .iter()
            .filter(|r| filter.matches(r))
            .map(|r| r.email.clone()),
    );
    targets
}

/// Filter `dataset` to the targets, merge `enriched` records and build the result.
///
/// Enriched records come from targeted lookups and are merged as-is.
pub fn analyze(
    dataset: &[ExposureRecord],
    filter: &TargetFilter,
    enriched: Vec<ExposureRecord>,
    options: &AnalysisOptions,
) -> Analysis {
    let filtered = filter.apply(dataset);
    debug!(
        dataset = dataset.len(),
        matched = filtered.len(),
        enriched = enriched.len(),
        "Filtered dataset"
    );

    let (result, matched) = ResultBuilder::new(options.as_of)
        .with_records(filtered)
        .with_enriched(enriched)
        .with_weights(options.weights.clone())
        .with_policy(options.policy.clone())
        .with_generated_at(options.generated_at.clone())
        .with_sample_limit(options.sample_limit)
        .build();

    Analysis { matched, result }
}
