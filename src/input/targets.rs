//! Target email list loading.

use crate::error::{Result, TrackerError};
use crate::exposure::normalize_email;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a file with one email address per line.
pub fn read_emails_file(path: &Path) -> Result<BTreeSet<String>> {
    if !path.exists() {
        return Err(TrackerError::FileNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path).map_err(|e| TrackerError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    let emails = parse_email_list(&content);
    debug!(path = %path.display(), count = emails.len(), "Loaded target emails");
    Ok(emails)
}

/// Parse a newline-separated email list.
///
/// Lines are trimmed and lowercased; blank lines, `#` comments and lines
/// without an `@` are ignored. The result is sorted and deduplicated.
pub fn parse_email_list(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && line.contains('@'))
        .map(normalize_email)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_email_list() {
        let emails = parse_email_list(
            "# targets\nBob@Acme.test\n\n  alice@acme.test  \nnot-an-email\nbob@acme.test\n",
        );
        assert_eq!(
            emails.into_iter().collect::<Vec<_>>(),
            vec!["alice@acme.test", "bob@acme.test"]
        );
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_email_list("").is_empty());
        assert!(parse_email_list("# only a comment\n").is_empty());
    }

    #[test]
    fn test_read_emails_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("emails.txt");
        fs::write(&path, "carol@acme.test\n").unwrap();

        let emails = read_emails_file(&path).unwrap();
        assert!(emails.contains("carol@acme.test"));
    }

    #[test]
    fn test_read_emails_file_missing() {
        let result = read_emails_file(Path::new("/nonexistent/emails.txt"));
        assert!(matches!(result, Err(TrackerError::FileNotFound(_))));
    }
}
