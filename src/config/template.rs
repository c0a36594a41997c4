//! Configuration template generation.

use super::types::Config;

impl Config {
    /// Generate a YAML configuration template with comments.
    ///
    /// The uncommented values are the built-in defaults.
    pub fn generate_template() -> String {
        r#"# breach-tracker Configuration File
# Place this file as .breach-tracker.yaml in the directory you run from

# =============================================================================
# SEVERITY SCORING
# =============================================================================
# Each distinct category of exposed data adds its points to a record's
# severity. The sum is clamped to 1.0-5.0. Weights must be non-negative.
scoring:
  field_weights:
    email: 1.0
    username: 0.5
    name: 0.25
    phone: 0.5
    address: 0.5
    date_of_birth: 0.75
    ip_address: 0.25
    security_questions: 1.0
    password_hash: 1.5
    password: 2.5
    two_factor_backup_codes: 2.0
    financial_card: 2.0
    bank_account: 2.0
    government_id: 2.0
    # Any field name not recognized above
    other: 0.1

# =============================================================================
# OVERALL RISK
# =============================================================================
# score = mean severity
#       + recency_bonus (latest breach within recency_window_days)
#       + reuse_weight * (share of emails seen in 2+ breaches)
# clamped to 0.0-5.0
risk:
  recency_window_days: 365
  recency_bonus: 0.5
  reuse_weight: 1.0
  medium_threshold: 2.5
  high_threshold: 4.0

# =============================================================================
# REPORT
# =============================================================================
report:
  # Rows in the "Example Exposures" table
  sample_limit: 15
  # Breaches listed in the ranking (0 = all)
  top_breaches: 25

# =============================================================================
# LIVE ENRICHMENT (Have I Been Pwned)
# =============================================================================
# Disabled unless max_lookups > 0 and the API key variable is set.
enrichment:
  max_lookups: 0
  pace_ms: 1600
  api_key_env: HIBP_API_KEY
  base_url: https://haveibeenpwned.com/api/v3
  timeout_secs: 30
"#
        .to_string()
    }
}
