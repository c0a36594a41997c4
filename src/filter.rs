//! Target selection over exposure records.

use crate::error::{Result, TrackerError};
use crate::exposure::{ExposureRecord, normalize_email};
use std::collections::BTreeSet;

/// Selects records by email domain and/or explicit email addresses.
///
/// A record matches when its domain equals the target domain OR its email is
/// in the target set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFilter {
    domain: Option<String>,
    emails: BTreeSet<String>,
}

impl TargetFilter {
    /// Build a filter. At least one criterion must be non-empty.
    pub fn new<I, S>(domain: Option<&str>, emails: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domain = domain
            .map(|d| d.trim().trim_start_matches('@').to_lowercase())
            .filter(|d| !d.is_empty());
        let emails: BTreeSet<String> = emails
            .into_iter()
            .map(|e| normalize_email(e.as_ref()))
            .filter(|e| !e.is_empty())
            .collect();

        if domain.is_none() && emails.is_empty() {
            return Err(TrackerError::NoFilterCriteria);
        }

        Ok(Self { domain, emails })
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn emails(&self) -> &BTreeSet<String> {
        &self.emails
    }

    pub fn matches(&self, record: &ExposureRecord) -> bool {
        let domain_match = match (&self.domain, record.domain()) {
            (Some(target), Some(domain)) => domain.eq_ignore_ascii_case(target),
            _ => false,
        };
        domain_match || self.emails.contains(&record.email)
    }

    /// Matching records, in input order.
    pub fn apply(&self, records: &[ExposureRecord]) -> Vec<ExposureRecord> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}
