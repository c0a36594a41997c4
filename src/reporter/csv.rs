//! Flat CSV listing of matched exposure records.

use crate::error::{Result, TrackerError};
use crate::exposure::ExposureRecord;

/// Column order of the exported listing.
pub const EXPORT_COLUMNS: [&str; 4] = ["email", "source", "breach_date", "compromised_data"];

/// Render records as CSV, sorted by email, breach date (unknown first) and
/// source. Field lists use the `;` separator of the input format so the
/// export can be loaded back as a dataset.
pub fn export_records(records: &[ExposureRecord]) -> Result<String> {
    let mut sorted: Vec<&ExposureRecord> = records.iter().collect();
    sorted.sort_by(|a, b| {
        a.email
            .cmp(&b.email)
            .then_with(|| a.breach_date.cmp(&b.breach_date))
            .then_with(|| a.source.cmp(&b.source))
    });

    let csv_error = |e: csv::Error| TrackerError::CsvError {
        path: "<export>".to_string(),
        source: e,
    };

    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(EXPORT_COLUMNS).map_err(csv_error)?;
    for record in sorted {
        wtr.write_record([
            record.email.as_str(),
            record.source.as_str(),
            record.date_label().as_str(),
            record.joined_fields(";").as_str(),
        ])
        .map_err(csv_error)?;
    }

    let bytes = wtr.into_inner().map_err(|e| TrackerError::WriteError {
        path: "<export>".to_string(),
        source: e.into_error(),
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
