//! Markdown reporter for exposure results
//!
//! Generates a human-readable findings document suitable for tickets,
//! pull requests and incident notes.

use crate::aggregator::{BreachSummary, OverallResult};
use crate::exposure::ExposureRecord;
use crate::reporter::Reporter;
use crate::scoring::RiskLevel;

pub struct MarkdownReporter {
    /// Maximum breaches listed in the ranking (0 = all).
    breach_limit: usize,
}

impl MarkdownReporter {
    pub fn new() -> Self {
        Self { breach_limit: 0 }
    }

    pub fn with_breach_limit(mut self, limit: usize) -> Self {
        self.breach_limit = limit;
        self
    }

    fn risk_level_emoji(&self, level: &RiskLevel) -> &'static str {
        match level {
            RiskLevel::Low => "\u{1F7E2}",    // 🟢
            RiskLevel::Medium => "\u{1F7E1}", // 🟡
            RiskLevel::High => "\u{1F534}",   // 🔴
        }
    }

    fn format_header(&self, result: &OverallResult) -> String {
        let mut output = String::new();
        output.push_str("# Data Breach & Credential Exposure Findings\n\n");
        if !result.generated_at.is_empty() {
            output.push_str(&format!("Generated: `{}`\n\n", result.generated_at));
        }

        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!(
            "| Total exposed accounts | {} |\n",
            result.total_exposed_accounts
        ));
        output.push_str(&format!("| Unique emails | {} |\n", result.unique_emails));
        output.push_str(&format!(
            "| Distinct breaches | {} |\n",
            result.distinct_breaches
        ));
        output.push_str(&format!(
            "| Emails in 2+ breaches | {} |\n",
            result.emails_in_multiple_breaches
        ));
        if result.enriched_records > 0 {
            output.push_str(&format!(
                "| Records from live lookups | {} |\n",
                result.enriched_records
            ));
        }
        output.push_str(&format!(
            "| Overall risk score | {} **{:.2}** ({}) |\n",
            self.risk_level_emoji(&result.risk_level),
            result.overall_risk_score,
            result.risk_level
        ));
        output.push('\n');
        output
    }

    fn format_breaches(&self, result: &OverallResult) -> String {
        let mut output = String::from("## Top Breaches by Severity\n\n");

        if result.breach_summaries.is_empty() {
            output.push_str("_No exposures found in dataset._\n\n");
            return output;
        }

        let shown: &[BreachSummary] = match self.breach_limit {
            0 => &result.breach_summaries,
            n => &result.breach_summaries[..n.min(result.breach_summaries.len())],
        };

        output.push_str("| # | Breach | Records | Unique emails | Avg severity | Latest breach | Top data |\n");
        output.push_str("|---|--------|---------|---------------|--------------|---------------|----------|\n");
        for (rank, summary) in shown.iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {:.1} ({}) | {} | {} |\n",
                rank + 1,
                escape_cell(&summary.source),
                summary.record_count,
                summary.unique_email_count,
                summary.avg_severity,
                summary.risk_level,
                summary
                    .latest_breach_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "unknown".to_string()),
                escape_cell(&summary.top_compromised_data.join(", "))
            ));
        }

        if shown.len() < result.breach_summaries.len() {
            output.push_str(&format!(
                "\n_Showing {} of {} breaches._\n",
                shown.len(),
                result.breach_summaries.len()
            ));
        }
        output.push('\n');
        output
    }

    fn format_examples(&self, samples: &[ExposureRecord]) -> String {
        let mut output = String::from("## Example Exposures\n\n");

        if samples.is_empty() {
            output.push_str("_N/A_\n\n");
            return output;
        }

        output.push_str("| Email | Breach | Breach date | Compromised data |\n");
        output.push_str("|-------|--------|-------------|------------------|\n");
        for record in samples {
            let date = record.date_label();
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                escape_cell(&record.email),
                escape_cell(&record.source),
                if date.is_empty() { "unknown" } else { date.as_str() },
                escape_cell(&record.joined_fields("; "))
            ));
        }
        output.push('\n');
        output
    }

    fn format_footer(&self) -> String {
        format!(
            "---\n\n*Generated by breach-tracker v{}. Use only authorized or fictional data.*\n",
            env!("CARGO_PKG_VERSION")
        )
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for MarkdownReporter {
    fn report(&self, result: &OverallResult) -> String {
        let mut output = String::new();
        output.push_str(&self.format_header(result));
        output.push_str(&self.format_breaches(result));
        output.push_str(&self.format_examples(&result.sample_exposures));
        output.push_str(&self.format_footer());
        output
    }
}

/// Keep a value inside one table cell.
fn escape_cell(value: &str) -> String {
    value.replace("\r\n", " ").replace(['\r', '\n'], " ").replace('|', "\\|")
}
