//! Have I Been Pwned v3 lookups.

use super::{EnrichmentError, EnrichmentProvider};
use crate::config::EnrichmentConfig;
use crate::exposure::ExposureRecord;
use crate::input::parse_breach_date;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::cell::Cell;
use std::time::{Duration, Instant};
use tracing::debug;

/// One breach entry from the `breachedaccount` endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HibpBreach {
    pub name: String,
    #[serde(default)]
    pub breach_date: Option<String>,
    #[serde(default)]
    pub data_classes: Vec<String>,
}

/// Blocking HIBP client with request pacing.
pub struct HibpProvider {
    client: Client,
    base_url: String,
    api_key: String,
    pace: Duration,
    last_request: Cell<Option<Instant>>,
}

impl std::fmt::Debug for HibpProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HibpProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .field("pace", &self.pace)
            .finish()
    }
}

impl HibpProvider {
    pub fn new(config: &EnrichmentConfig, api_key: String) -> Result<Self, EnrichmentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            pace: Duration::from_millis(config.pace_ms),
            last_request: Cell::new(None),
        })
    }

    /// Build a provider when the configured API key variable is set.
    pub fn from_env(config: &EnrichmentConfig) -> Option<Result<Self, EnrichmentError>> {
        let key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())?;
        Some(Self::new(config, key))
    }

    fn lookup_url(&self, email: &str) -> Result<reqwest::Url, EnrichmentError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| EnrichmentError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| EnrichmentError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push("breachedaccount")
            .push(email);
        url.query_pairs_mut()
            .append_pair("truncateResponse", "false");
        Ok(url)
    }

    fn wait_for_slot(&self) {
        if let Some(last) = self.last_request.get() {
            let elapsed = last.elapsed();
            if elapsed < self.pace {
                std::thread::sleep(self.pace - elapsed);
            }
        }
        self.last_request.set(Some(Instant::now()));
    }
}

impl EnrichmentProvider for HibpProvider {
    fn name(&self) -> &str {
        "hibp"
    }

    fn lookup(&self, email: &str) -> Result<Vec<ExposureRecord>, EnrichmentError> {
        let url = self.lookup_url(email)?;
        self.wait_for_slot();
        debug!(email, "Querying HIBP");

        let response = self
            .client
            .get(url)
            .header("hibp-api-key", &self.api_key)
            .send()?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(Vec::new()),
            StatusCode::TOO_MANY_REQUESTS => Err(EnrichmentError::RateLimited {
                retry_after: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            }),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(EnrichmentError::Unauthorized(response.status().as_u16()))
            }
            status if status.is_success() => {
                let breaches: Vec<HibpBreach> = response.json()?;
                Ok(records_from_breaches(email, &breaches))
            }
            status => Err(EnrichmentError::Status(status.as_u16())),
        }
    }
}

/// Convert HIBP breach entries into exposure records for `email`.
pub fn records_from_breaches(email: &str, breaches: &[HibpBreach]) -> Vec<ExposureRecord> {
    breaches
        .iter()
        .filter_map(|breach| {
            let fields: Vec<String> = breach
                .data_classes
                .iter()
                .map(|c| normalize_data_class(c))
                .collect();
            ExposureRecord::new(
                email,
                &breach.name,
                breach.breach_date.as_deref().and_then(parse_breach_date),
                fields,
                false,
            )
        })
        .collect()
}

/// Map an HIBP data class ("Email addresses") to a dataset field name ("email").
pub fn normalize_data_class(class: &str) -> String {
    let lower = class.trim().to_lowercase();
    let mapped = match lower.as_str() {
        "email addresses" => "email",
        "passwords" => "password",
        "usernames" => "username",
        "names" => "name",
        "phone numbers" => "phone",
        "physical addresses" => "address",
        "dates of birth" => "dob",
        "ip addresses" => "ip_address",
        "security questions and answers" => "security_questions",
        "credit cards" | "partial credit card data" => "credit_card",
        "bank account numbers" => "bank_account",
        "government issued ids" | "passport numbers" | "social security numbers" => {
            "national_id"
        }
        _ => return lower.replace([' ', '-'], "_"),
    };
    mapped.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exposure::DataField;
    use chrono::NaiveDate;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    const RESPONSE: &str = r#"[
        {
            "Name": "Adobe",
            "Title": "Adobe",
            "BreachDate": "2013-10-04",
            "DataClasses": ["Email addresses", "Password hints", "Passwords", "Usernames"]
        },
        {
            "Name": "Undated",
            "DataClasses": []
        }
    ]"#;

    #[test]
    fn test_records_from_breaches() {
        let breaches: Vec<HibpBreach> = serde_json::from_str(RESPONSE).unwrap();
        let records = records_from_breaches("Bob@Acme.test", &breaches);

        assert_eq!(records.len(), 2);
        let adobe = &records[0];
        assert_eq!(adobe.email, "bob@acme.test");
        assert_eq!(adobe.source, "Adobe");
        assert_eq!(adobe.breach_date, NaiveDate::from_ymd_opt(2013, 10, 4));
        assert!(adobe.compromised_data.contains("password"));
        assert!(adobe.compromised_data.contains("password_hints"));
        assert!(adobe.has_password_hash);

        let undated = &records[1];
        assert_eq!(undated.breach_date, None);
        assert!(undated.compromised_data.contains("email"));
    }

    #[test]
    fn test_normalize_data_class() {
        assert_eq!(normalize_data_class("Email addresses"), "email");
        assert_eq!(normalize_data_class("Dates of birth"), "dob");
        assert_eq!(normalize_data_class("Physical addresses"), "address");
        assert_eq!(normalize_data_class("Social media profiles"), "social_media_profiles");
    }

    #[test]
    fn test_normalized_classes_score_as_expected() {
        for (class, field) in [
            ("Passwords", DataField::Password),
            ("Phone numbers", DataField::Phone),
            ("Credit cards", DataField::FinancialCard),
            ("Passport numbers", DataField::GovernmentId),
            ("Security questions and answers", DataField::SecurityQuestions),
        ] {
            assert_eq!(DataField::classify(&normalize_data_class(class)), field);
        }
    }

    #[test]
    fn test_lookup_url_escapes_email() {
        let provider = HibpProvider::new(&EnrichmentConfig::default(), "key".to_string()).unwrap();
        let url = provider.lookup_url("bob+test@acme.test").unwrap();
        assert!(
            url.as_str()
                .starts_with("https://haveibeenpwned.com/api/v3/breachedaccount/bob+test@acme.test")
        );
        assert!(url.as_str().ends_with("?truncateResponse=false"));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let provider =
            HibpProvider::new(&EnrichmentConfig::default(), "secret-key".to_string()).unwrap();
        let debug = format!("{:?}", provider);
        assert!(!debug.contains("secret-key"));
    }

    /// Answer one HTTP request with a canned response; the handle yields the raw request.
    fn serve_once(status: &str, headers: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\n{}Content-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            headers,
            body.len(),
            body
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{}/api/v3", addr), handle)
    }

    fn local_provider(base_url: String) -> HibpProvider {
        let config = EnrichmentConfig {
            base_url,
            pace_ms: 0,
            timeout_secs: 5,
            ..EnrichmentConfig::default()
        };
        HibpProvider::new(&config, "test-key".to_string()).unwrap()
    }

    #[test]
    fn test_lookup_success_decodes_breaches() {
        let body = r#"[{"Name":"Adobe","BreachDate":"2013-10-04","DataClasses":["Email addresses","Passwords"]}]"#;
        let (url, server) = serve_once(
            "200 OK",
            "Content-Type: application/json\r\n",
            body,
        );

        let records = local_provider(url).lookup("bob@acme.test").unwrap();
        let request = server.join().unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source, "Adobe");
        assert!(records[0].compromised_data.contains("password"));
        assert!(request.starts_with(
            "GET /api/v3/breachedaccount/bob@acme.test?truncateResponse=false "
        ));
        assert!(request.to_lowercase().contains("hibp-api-key: test-key"));
    }

    #[test]
    fn test_lookup_not_found_is_empty() {
        let (url, server) = serve_once("404 Not Found", "", "");
        let records = local_provider(url).lookup("nobody@acme.test").unwrap();
        server.join().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_lookup_rate_limited() {
        let (url, server) = serve_once("429 Too Many Requests", "Retry-After: 7\r\n", "");
        let err = local_provider(url).lookup("bob@acme.test").unwrap_err();
        server.join().unwrap();
        assert!(matches!(
            err,
            EnrichmentError::RateLimited {
                retry_after: Some(7)
            }
        ));
    }

    #[test]
    fn test_lookup_rejected_key() {
        for (status, code) in [("401 Unauthorized", 401), ("403 Forbidden", 403)] {
            let (url, server) = serve_once(status, "", "");
            let err = local_provider(url).lookup("bob@acme.test").unwrap_err();
            server.join().unwrap();
            assert!(matches!(err, EnrichmentError::Unauthorized(c) if c == code));
        }
    }

    #[test]
    fn test_lookup_unexpected_status() {
        let (url, server) = serve_once("503 Service Unavailable", "", "");
        let err = local_provider(url).lookup("bob@acme.test").unwrap_err();
        server.join().unwrap();
        assert!(matches!(err, EnrichmentError::Status(503)));
    }
}
