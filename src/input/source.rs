//! Breach dataset loading.

use crate::error::{Result, TrackerError};
use crate::exposure::{ExposureRecord, split_fields};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Columns every dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = ["email", "source", "breach_date", "compromised_data"];
/// Optional column flagging an exposed password hash.
pub const PASSWORD_HASH_COLUMN: &str = "password_hash";

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    email: usize,
    source: usize,
    breach_date: usize,
    compromised_data: usize,
    password_hash: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord, origin: &str) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().trim_start_matches('\u{feff}').eq_ignore_ascii_case(name))
        };

        let missing: Vec<String> = REQUIRED_COLUMNS
            .into_iter()
            .filter(|c| find(*c).is_none())
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(TrackerError::MissingColumns {
                path: origin.to_string(),
                columns: missing,
            });
        }

        // Presence checked above.
        let position = |name: &str| find(name).unwrap_or_default();
        Ok(Self {
            email: position("email"),
            source: position("source"),
            breach_date: position("breach_date"),
            compromised_data: position("compromised_data"),
            password_hash: find(PASSWORD_HASH_COLUMN),
        })
    }
}

/// Load exposure records from a CSV file.
pub fn load_dataset(path: &Path) -> Result<Vec<ExposureRecord>> {
    if !path.exists() {
        return Err(TrackerError::FileNotFound(path.display().to_string()));
    }
    let file = File::open(path).map_err(|e| TrackerError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    let records = load_records(file, &path.display().to_string())?;
    info!(path = %path.display(), records = records.len(), "Loaded breach dataset");
    Ok(records)
}

/// Load exposure records from any CSV reader.
///
/// `origin` names the source in errors and logs. Rows without an email or
/// source, and rows the CSV reader cannot decode, are skipped.
pub fn load_records<R: Read>(reader: R, origin: &str) -> Result<Vec<ExposureRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| TrackerError::CsvError {
            path: origin.to_string(),
            source: e,
        })?
        .clone();
    let columns = ColumnMap::from_headers(&headers, origin)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (index, row) in rdr.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                debug!(origin, row = index + 1, error = %e, "Skipping unreadable row");
                skipped += 1;
                continue;
            }
        };
        let cell = |i: usize| row.get(i).unwrap_or("");

        let raw_date = cell(columns.breach_date);
        let breach_date = parse_breach_date(raw_date);
        if breach_date.is_none() && !raw_date.is_empty() {
            debug!(origin, row = index + 1, value = raw_date, "Unparseable breach date");
        }

        let password_flag = columns
            .password_hash
            .map(|i| parse_password_flag(cell(i)))
            .unwrap_or(false);

        match ExposureRecord::new(
            cell(columns.email),
            cell(columns.source),
            breach_date,
            split_fields(cell(columns.compromised_data)),
            password_flag,
        ) {
            Some(record) => records.push(record),
            None => {
                debug!(origin, row = index + 1, "Skipping row without email or source");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        debug!(origin, skipped, "Skipped malformed rows");
    }
    Ok(records)
}

/// Parse a breach date cell. Unknown formats yield `None`.
pub fn parse_breach_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Interpret the optional `password_hash` column.
///
/// Blank and explicit negatives are false; anything else (a hash value,
/// `true`, `yes`, `1`) is true.
pub fn parse_password_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "n" | "none" | "null" | "nan"
    )
}
