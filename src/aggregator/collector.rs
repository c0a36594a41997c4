//! Exposure collector for grouping matched records.

use crate::exposure::ExposureRecord;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Collects exposure records and indexes them by breach source and by email.
#[derive(Debug, Default)]
pub struct ExposureCollector {
    records: Vec<ExposureRecord>,
    by_source: BTreeMap<String, Vec<usize>>,
    sources_by_email: BTreeMap<String, BTreeSet<String>>,
}

impl ExposureCollector {
    /// Create a new exposure collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to the collector.
    pub fn add(&mut self, record: ExposureRecord) {
        let index = self.records.len();

        self.by_source
            .entry(record.source.clone())
            .or_default()
            .push(index);

        self.sources_by_email
            .entry(record.email.clone())
            .or_default()
            .insert(record.source.clone());

        self.records.push(record);
    }

    /// Add multiple records.
    pub fn add_all(&mut self, records: impl IntoIterator<Item = ExposureRecord>) {
        for record in records {
            self.add(record);
        }
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[ExposureRecord] {
        &self.records
    }

    /// Records grouped by source, in source-name order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, Vec<&ExposureRecord>)> {
        self.by_source.iter().map(|(source, indices)| {
            (
                source.as_str(),
                indices.iter().map(|&i| &self.records[i]).collect(),
            )
        })
    }

    /// Records for a specific source.
    pub fn by_source(&self, source: &str) -> Vec<&ExposureRecord> {
        self.by_source
            .get(source)
            .map(|indices| indices.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }

    /// Distinct sources an email appears in.
    pub fn sources_for(&self, email: &str) -> Option<&BTreeSet<String>> {
        self.sources_by_email.get(email)
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn unique_emails(&self) -> usize {
        self.sources_by_email.len()
    }

    pub fn distinct_sources(&self) -> usize {
        self.by_source.len()
    }

    /// Number of emails seen in two or more distinct breaches.
    pub fn emails_in_multiple_breaches(&self) -> usize {
        self.sources_by_email
            .values()
            .filter(|sources| sources.len() >= 2)
            .count()
    }

    /// Fraction of unique emails seen in two or more breaches (0 when empty).
    pub fn reuse_fraction(&self) -> f64 {
        match self.unique_emails() {
            0 => 0.0,
            n => self.emails_in_multiple_breaches() as f64 / n as f64,
        }
    }

    /// Most recent known breach date across all records.
    pub fn latest_breach_date(&self) -> Option<NaiveDate> {
        self.records.iter().filter_map(|r| r.breach_date).max()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the collector and return all records.
    pub fn into_records(self) -> Vec<ExposureRecord> {
        self.records
    }
}
