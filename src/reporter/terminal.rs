use crate::aggregator::{BreachSummary, OverallResult};
use crate::reporter::Reporter;
use crate::scoring::RiskLevel;
use colored::Colorize;

pub struct TerminalReporter {
    verbose: bool,
    breach_limit: usize,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            breach_limit: 0,
        }
    }

    pub fn with_breach_limit(mut self, limit: usize) -> Self {
        self.breach_limit = limit;
        self
    }

    fn risk_level_color(&self, level: &RiskLevel) -> colored::ColoredString {
        let label = level.as_str();
        match level {
            RiskLevel::Low => label.green().bold(),
            RiskLevel::Medium => label.yellow().bold(),
            RiskLevel::High => label.red().bold(),
        }
    }

    fn format_breach(&self, rank: usize, summary: &BreachSummary) -> String {
        let mut output = format!(
            "{:>3}. {} {} records | {} emails | severity {:.1} [{}] | latest {}\n",
            rank,
            summary.source.bold(),
            summary.record_count,
            summary.unique_email_count,
            summary.avg_severity,
            self.risk_level_color(&summary.risk_level),
            summary
                .latest_breach_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        );

        if self.verbose && !summary.top_compromised_data.is_empty() {
            output.push_str(&format!(
                "     {} {}\n",
                "data:".dimmed(),
                summary.top_compromised_data.join(", ")
            ));
        }
        output
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, result: &OverallResult) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "Breach exposure summary".bold()));
        output.push_str(&format!(
            "  Exposed accounts:  {}\n",
            result.total_exposed_accounts
        ));
        output.push_str(&format!("  Unique emails:     {}\n", result.unique_emails));
        output.push_str(&format!("  Distinct breaches: {}\n", result.distinct_breaches));
        output.push_str(&format!(
            "  Reused emails:     {}\n",
            result.emails_in_multiple_breaches
        ));
        if result.enriched_records > 0 {
            output.push_str(&format!("  Live lookups:      {}\n", result.enriched_records));
        }
        output.push_str(&format!(
            "  Risk score:        {:.2} ({})\n",
            result.overall_risk_score,
            self.risk_level_color(&result.risk_level)
        ));

        if self.verbose {
            let b = &result.risk_breakdown;
            output.push_str(&format!(
                "  {}\n",
                format!(
                    "mean severity {:.2} + recency {:.2} + reuse {:.2}",
                    b.mean_severity, b.recency_adjustment, b.reuse_adjustment
                )
                .dimmed()
            ));
        }
        output.push('\n');

        if result.breach_summaries.is_empty() {
            output.push_str(&format!("{}\n", "No exposures found.".green()));
            return output;
        }

        output.push_str(&format!("{}\n", "Top breaches by severity".bold()));
        let shown = match self.breach_limit {
            0 => result.breach_summaries.len(),
            n => n.min(result.breach_summaries.len()),
        };
        for (i, summary) in result.breach_summaries.iter().take(shown).enumerate() {
            output.push_str(&self.format_breach(i + 1, summary));
        }
        if shown < result.breach_summaries.len() {
            output.push_str(&format!(
                "     ... and {} more\n",
                result.breach_summaries.len() - shown
            ));
        }

        output
    }
}
