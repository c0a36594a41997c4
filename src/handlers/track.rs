//! Exposure tracking handler.

use crate::cli::Cli;
use crate::config::Config;
use crate::enrichment::{HibpProvider, enrich};
use crate::error::Result;
use crate::exposure::ExposureRecord;
use crate::filter::TargetFilter;
use crate::input::{load_dataset, read_emails_file};
use crate::output::{OutputFormatter, WrittenFiles, write_outputs};
use crate::reporter::{Reporter, markdown::MarkdownReporter};
use crate::run::{Analysis, AnalysisOptions, analyze, lookup_targets};
use crate::scoring::RiskLevel;
use chrono::Utc;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info, warn};

/// Everything one tracking run produced.
#[derive(Debug)]
pub struct TrackOutcome {
    pub analysis: Analysis,
    pub rendered: String,
    pub written: Option<WrittenFiles>,
}

/// Run the tracker for the parsed command line.
pub fn handle_track(cli: &Cli) -> ExitCode {
    let cwd = std::env::current_dir().ok();
    match run_track(cli, cwd.as_deref()) {
        Ok(outcome) => {
            println!("{}", outcome.rendered);
            if let Some(files) = &outcome.written {
                eprintln!(
                    "Wrote {}, {} and {}",
                    files.csv.display(),
                    files.json.display(),
                    files.markdown.display()
                );
            }
            exit_code_for(&outcome.analysis, cli.fail_on)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Load, filter, enrich, score and render without touching stdout.
///
/// `project_root` is searched for a `.breach-tracker.*` config file.
pub fn run_track(cli: &Cli, project_root: Option<&Path>) -> Result<TrackOutcome> {
    let config = effective_config(cli, project_root)?;

    let mut emails: Vec<String> = cli.emails.clone();
    if let Some(path) = &cli.emails_file {
        let listed = read_emails_file(path)?;
        debug!(path = %path.display(), count = listed.len(), "Read target emails");
        emails.extend(listed);
    }
    let filter = TargetFilter::new(cli.domain.as_deref(), &emails)?;

    let dataset = load_dataset(&cli.offline)?;
    let enriched = live_records(&config, &dataset, &filter);

    let as_of = cli.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let options = AnalysisOptions::from_config(&config, as_of);
    let analysis = analyze(&dataset, &filter, enriched, &options);
    info!(
        matched = analysis.result.total_exposed_accounts,
        breaches = analysis.result.distinct_breaches,
        risk = analysis.result.overall_risk_score,
        "Analysis complete"
    );

    let rendered = OutputFormatter::new(cli.format)
        .with_verbose(cli.verbose)
        .with_breach_limit(config.report.top_breaches)
        .format(&analysis.result);

    let written = match &cli.out {
        Some(dir) => {
            let markdown = MarkdownReporter::new()
                .with_breach_limit(config.report.top_breaches)
                .report(&analysis.result);
            Some(write_outputs(
                dir,
                &analysis.matched,
                &analysis.result,
                &markdown,
            )?)
        }
        None => None,
    };

    Ok(TrackOutcome {
        analysis,
        rendered,
        written,
    })
}

/// Loaded config with command-line overrides applied.
fn effective_config(cli: &Cli, project_root: Option<&Path>) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref(), project_root)?;
    if let Some(max) = cli.max_lookups {
        config.enrichment.max_lookups = max;
    }
    if let Some(limit) = cli.sample_limit {
        config.report.sample_limit = limit;
    }
    Ok(config)
}

/// Records from the live provider, or none when lookups are disabled.
fn live_records(
    config: &Config,
    dataset: &[ExposureRecord],
    filter: &TargetFilter,
) -> Vec<ExposureRecord> {
    let max_lookups = config.enrichment.max_lookups;
    if max_lookups == 0 {
        return Vec::new();
    }

    let provider = match HibpProvider::from_env(&config.enrichment) {
        Some(Ok(provider)) => provider,
        Some(Err(e)) => {
            warn!(error = %e, "Could not create lookup client; running offline");
            return Vec::new();
        }
        None => {
            info!(
                env = %config.enrichment.api_key_env,
                "API key not set; running offline"
            );
            return Vec::new();
        }
    };

    let targets = lookup_targets(dataset, filter);
    enrich(&provider, targets.iter().map(String::as_str), max_lookups).records
}

/// 1 when `--fail-on` is set and a non-empty result reaches that level.
fn exit_code_for(analysis: &Analysis, fail_on: Option<RiskLevel>) -> ExitCode {
    match fail_on {
        Some(threshold)
            if !analysis.result.is_empty() && analysis.result.risk_level >= threshold =>
        {
            ExitCode::from(1)
        }
        _ => ExitCode::SUCCESS,
    }
}
