//! Per-breach summaries and their ranking.

use super::collector::ExposureCollector;
use crate::exposure::ExposureRecord;
use crate::scoring::{FieldWeights, RiskLevel, RiskPolicy, round_to};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Number of field names listed in `top_compromised_data`.
pub const TOP_FIELDS: usize = 5;

/// Aggregate for one breach source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreachSummary {
    pub source: String,
    pub record_count: usize,
    pub unique_email_count: usize,
    /// Mean record severity, one decimal.
    pub avg_severity: f64,
    pub risk_level: RiskLevel,
    pub latest_breach_date: Option<NaiveDate>,
    /// Most frequent exposed field names, most common first.
    pub top_compromised_data: Vec<String>,
}

impl BreachSummary {
    /// Summarize one non-empty group of records sharing a source.
    pub fn from_group(
        source: &str,
        records: &[&ExposureRecord],
        weights: &FieldWeights,
        policy: &RiskPolicy,
    ) -> Self {
        let unique_emails: BTreeSet<&str> = records.iter().map(|r| r.email.as_str()).collect();
        let latest_breach_date = records.iter().filter_map(|r| r.breach_date).max();

        let total: f64 = records.iter().map(|r| weights.record_severity(r)).sum();
        let avg_severity = if records.is_empty() {
            0.0
        } else {
            round_to(total / records.len() as f64, 1)
        };

        Self {
            source: source.to_string(),
            record_count: records.len(),
            unique_email_count: unique_emails.len(),
            avg_severity,
            risk_level: policy.level_for(avg_severity),
            latest_breach_date,
            top_compromised_data: top_fields(records, TOP_FIELDS),
        }
    }

    /// Ranking order: severity desc, then most recent first (unknown last),
    /// then source name asc.
    pub fn rank(&self, other: &Self) -> Ordering {
        other
            .avg_severity
            .total_cmp(&self.avg_severity)
            .then_with(|| match (self.latest_breach_date, other.latest_breach_date) {
                (Some(a), Some(b)) => b.cmp(&a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| self.source.cmp(&other.source))
    }
}

/// Build ranked summaries for every source in the collector.
pub fn summarize(
    collector: &ExposureCollector,
    weights: &FieldWeights,
    policy: &RiskPolicy,
) -> Vec<BreachSummary> {
    let mut summaries: Vec<BreachSummary> = collector
        .groups()
        .map(|(source, records)| BreachSummary::from_group(source, &records, weights, policy))
        .collect();
    summaries.sort_by(BreachSummary::rank);
    summaries
}

fn top_fields(records: &[&ExposureRecord], limit: usize) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for field in records.iter().flat_map(|r| r.compromised_data.iter()) {
        *counts.entry(field.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(field, _)| field.to_string())
        .collect()
}
