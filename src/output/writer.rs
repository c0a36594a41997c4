//! Report files written to the output directory.

use crate::aggregator::OverallResult;
use crate::error::{Result, TrackerError};
use crate::exposure::ExposureRecord;
use crate::reporter::csv::export_records;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const CSV_FILE: &str = "exposed_accounts.csv";
pub const JSON_FILE: &str = "results.json";
pub const MARKDOWN_FILE: &str = "report.md";

/// Paths of the files produced by [`write_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub csv: PathBuf,
    pub json: PathBuf,
    pub markdown: PathBuf,
}

/// Write the exposed-account CSV, JSON result and Markdown report into `dir`.
///
/// The directory is created if needed; existing files are overwritten.
pub fn write_outputs(
    dir: &Path,
    records: &[ExposureRecord],
    result: &OverallResult,
    markdown: &str,
) -> Result<WrittenFiles> {
    fs::create_dir_all(dir).map_err(|e| TrackerError::WriteError {
        path: dir.display().to_string(),
        source: e,
    })?;

    let files = WrittenFiles {
        csv: dir.join(CSV_FILE),
        json: dir.join(JSON_FILE),
        markdown: dir.join(MARKDOWN_FILE),
    };

    write_file(&files.csv, &export_records(records)?)?;
    write_file(&files.json, &serde_json::to_string_pretty(result)?)?;
    write_file(&files.markdown, markdown)?;

    info!(dir = %dir.display(), records = records.len(), "Wrote report files");
    Ok(files)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| TrackerError::WriteError {
        path: path.display().to_string(),
        source: e,
    })
}
