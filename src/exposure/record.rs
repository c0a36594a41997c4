use super::field::DataField;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Field recorded for every exposure whose field list normalizes to nothing.
pub const BASELINE_FIELD: &str = "email";

/// One breach exposure: an email address seen in a named breach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureRecord {
    pub email: String,
    pub source: String,
    pub breach_date: Option<NaiveDate>,
    pub compromised_data: BTreeSet<String>,
    pub has_password_hash: bool,
}

impl ExposureRecord {
    /// Build a normalized record.
    ///
    /// Returns `None` when the email or source is blank. Field tokens are
    /// trimmed, lowercased and deduplicated; an empty field list becomes
    /// `{"email"}`. `password_flag` carries the optional dataset column and is
    /// OR-ed with the presence of any password-related field.
    pub fn new<I, S>(
        email: &str,
        source: &str,
        breach_date: Option<NaiveDate>,
        fields: I,
        password_flag: bool,
    ) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let email = normalize_email(email);
        let source = source.trim();
        if email.is_empty() || source.is_empty() {
            return None;
        }

        let mut compromised_data: BTreeSet<String> = fields
            .into_iter()
            .map(|f| f.as_ref().trim().to_lowercase())
            .filter(|f| !f.is_empty())
            .collect();
        if compromised_data.is_empty() {
            compromised_data.insert(BASELINE_FIELD.to_string());
        }

        let has_password_hash = password_flag
            || compromised_data
                .iter()
                .any(|f| DataField::classify(f).is_password_related());

        Some(Self {
            email,
            source: source.to_string(),
            breach_date,
            compromised_data,
            has_password_hash,
        })
    }

    /// Distinct field categories exposed by this record.
    pub fn categories(&self) -> BTreeSet<DataField> {
        self.compromised_data
            .iter()
            .map(|f| DataField::classify(f))
            .collect()
    }

    /// Domain part of the email (after the last `@`), if any.
    pub fn domain(&self) -> Option<&str> {
        self.email.rsplit_once('@').map(|(_, domain)| domain)
    }

    /// Field list joined with `sep`, in sorted order.
    pub fn joined_fields(&self, sep: &str) -> String {
        self.compromised_data
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(sep)
    }

    /// ISO-8601 date, or an empty string when unknown.
    pub fn date_label(&self) -> String {
        self.breach_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// Lowercase and trim an email address for matching.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Split a `;`-separated field cell into raw tokens.
pub fn split_fields(cell: &str) -> impl Iterator<Item = &str> {
    cell.split(';').map(str::trim).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
    }

    #[test]
    fn test_new_normalizes_email_and_fields() {
        let record = ExposureRecord::new(
            "  Bob@Acme.TEST ",
            " TravelDB ",
            date("2019-11-21"),
            split_fields("Email; PASSWORD ;phone;;email"),
            false,
        )
        .unwrap();

        assert_eq!(record.email, "bob@acme.test");
        assert_eq!(record.source, "TravelDB");
        assert_eq!(record.compromised_data.len(), 3);
        assert!(record.compromised_data.contains("password"));
        assert!(record.has_password_hash);
    }

    #[test]
    fn test_new_rejects_blank_email_or_source() {
        assert!(ExposureRecord::new("", "Src", None, ["email"], false).is_none());
        assert!(ExposureRecord::new("a@b.test", "   ", None, ["email"], false).is_none());
    }

    #[test]
    fn test_empty_fields_fall_back_to_email() {
        let record =
            ExposureRecord::new("a@b.test", "Src", None, split_fields(" ; ;"), false).unwrap();
        assert_eq!(
            record.compromised_data.iter().collect::<Vec<_>>(),
            vec![BASELINE_FIELD]
        );
        assert!(!record.has_password_hash);
    }

    #[test]
    fn test_password_flag_column_sets_hash_flag() {
        let record =
            ExposureRecord::new("a@b.test", "Src", None, ["email", "phone"], true).unwrap();
        assert!(record.has_password_hash);
    }

    #[test]
    fn test_domain_uses_last_at_sign() {
        let record = ExposureRecord::new("odd@name@acme.test", "Src", None, ["email"], false)
            .unwrap();
        assert_eq!(record.domain(), Some("acme.test"));
    }

    #[test]
    fn test_joined_fields_and_date_label() {
        let record = ExposureRecord::new(
            "a@b.test",
            "Src",
            date("2021-02-10"),
            ["password_hash", "email", "address"],
            false,
        )
        .unwrap();
        assert_eq!(record.joined_fields("; "), "address; email; password_hash");
        assert_eq!(record.date_label(), "2021-02-10");

        let undated = ExposureRecord::new("a@b.test", "Src", None, ["email"], false).unwrap();
        assert_eq!(undated.date_label(), "");
    }

    #[test]
    fn test_categories_are_distinct() {
        let record = ExposureRecord::new(
            "a@b.test",
            "Src",
            None,
            ["password", "passwords", "custom_a", "custom_b"],
            false,
        )
        .unwrap();
        let categories = record.categories();
        assert_eq!(categories.len(), 2);
        assert!(categories.contains(&DataField::Password));
        assert!(categories.contains(&DataField::Other));
    }
}
