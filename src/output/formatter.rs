//! Output formatter for exposure results.

use crate::aggregator::OverallResult;
use crate::cli::OutputFormat;
use crate::reporter::{
    Reporter, json::JsonReporter, markdown::MarkdownReporter, terminal::TerminalReporter,
};

/// Selects the reporter for the requested stdout format.
pub struct OutputFormatter {
    format: OutputFormat,
    verbose: bool,
    breach_limit: usize,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            verbose: false,
            breach_limit: 0,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Limit the breach ranking shown by terminal and Markdown output (0 = all).
    pub fn with_breach_limit(mut self, limit: usize) -> Self {
        self.breach_limit = limit;
        self
    }

    pub fn format(&self, result: &OverallResult) -> String {
        match self.format {
            OutputFormat::Terminal => TerminalReporter::new(self.verbose)
                .with_breach_limit(self.breach_limit)
                .report(result),
            OutputFormat::Json => JsonReporter::new().report(result),
            OutputFormat::Markdown => MarkdownReporter::new()
                .with_breach_limit(self.breach_limit)
                .report(result),
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::Terminal)
    }
}
