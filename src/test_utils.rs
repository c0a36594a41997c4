#[cfg(test)]
pub mod fixtures {
    use crate::exposure::{ExposureRecord, split_fields};
    use chrono::NaiveDate;

    /// Fixed evaluation date used by tests.
    pub fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 25).unwrap()
    }

    pub fn record(email: &str, source: &str, date: Option<&str>, fields: &str) -> ExposureRecord {
        let breach_date = date.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap());
        ExposureRecord::new(email, source, breach_date, split_fields(fields), false).unwrap()
    }

    /// One mailbox exposed by two unrelated breaches.
    pub fn bob_scenario() -> Vec<ExposureRecord> {
        vec![
            record(
                "bob@acme.test",
                "TravelDB",
                Some("2019-11-21"),
                "email;password;phone",
            ),
            record(
                "bob@acme.test",
                "ShopLeak",
                Some("2021-02-10"),
                "email;password_hash;address",
            ),
        ]
    }

    pub const SAMPLE_CSV: &str = "\
email,source,breach_date,compromised_data,password_hash
bob@acme.test,TravelDB,2019-11-21,email;password;phone,
bob@acme.test,ShopLeak,2021-02-10,email;password_hash;address,yes
alice@other.test,TravelDB,2019-11-21,email;password,
carol@acme.test,Forum,not-a-date,email;username,
,Forum,2020-01-01,email,
dave@acme.test,,2020-01-01,email,
";
}
