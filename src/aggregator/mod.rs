//! Aggregation of matched exposure records.
//!
//! Records are grouped by breach source into [`BreachSummary`] values,
//! ranked by severity and recency, and wrapped with dataset-wide counts and
//! the overall risk score into an [`OverallResult`].

pub mod collector;
pub mod result;
pub mod summary;

pub use collector::ExposureCollector;
pub use result::{DEFAULT_SAMPLE_LIMIT, OverallResult, ResultBuilder};
pub use summary::{BreachSummary, TOP_FIELDS, summarize};
