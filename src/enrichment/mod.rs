//! Optional live enrichment.
//!
//! A provider turns a target email into zero or more extra exposure records.
//! Those records are merged before aggregation; the aggregator never knows
//! where a record came from. Lookups are best-effort: a failing lookup is
//! logged and skipped.

pub mod hibp;

use crate::exposure::ExposureRecord;
use thiserror::Error;
use tracing::{debug, info, warn};

pub use hibp::HibpProvider;

#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid lookup URL: {0}")]
    InvalidUrl(String),

    #[error("Rate limited by provider (retry after {retry_after:?}s)")]
    RateLimited { retry_after: Option<u64> },

    #[error("Provider rejected the API key (status {0})")]
    Unauthorized(u16),

    #[error("Unexpected response status {0}")]
    Status(u16),
}

/// Source of additional exposure records for a single email.
pub trait EnrichmentProvider {
    /// Provider name used in logs.
    fn name(&self) -> &str;

    /// Look up one email address.
    fn lookup(&self, email: &str) -> Result<Vec<ExposureRecord>, EnrichmentError>;
}

/// Outcome of an enrichment pass.
#[derive(Debug, Default)]
pub struct EnrichmentOutcome {
    pub records: Vec<ExposureRecord>,
    pub looked_up: usize,
    pub failed: usize,
}

/// Look up at most `max_lookups` emails, in the given order.
pub fn enrich<'a>(
    provider: &dyn EnrichmentProvider,
    emails: impl IntoIterator<Item = &'a str>,
    max_lookups: usize,
) -> EnrichmentOutcome {
    let mut outcome = EnrichmentOutcome::default();

    for email in emails.into_iter().take(max_lookups) {
        outcome.looked_up += 1;
        match provider.lookup(email) {
            Ok(records) => {
                debug!(provider = provider.name(), email, found = records.len(), "Lookup complete");
                outcome.records.extend(records);
            }
            Err(e) => {
                warn!(provider = provider.name(), email, error = %e, "Lookup failed");
                outcome.failed += 1;
            }
        }
    }

    info!(
        provider = provider.name(),
        looked_up = outcome.looked_up,
        failed = outcome.failed,
        records = outcome.records.len(),
        "Enrichment finished"
    );
    outcome
}
