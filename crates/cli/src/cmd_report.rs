// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report command implementation.

use std::io::Write;

use anyhow::Context;

use prcov::cli::{Cli, OutputFormat, ReportArgs};
use prcov::correlate::CoverageCorrelator;
use prcov::discovery;
use prcov::error::ExitCode;
use prcov::git;
use prcov::github::GitHubClient;
use prcov::report::{self, Report};
use prcov::sonar::SonarClient;
use prcov::verbose::VerboseLogger;

/// Run the report command.
pub fn run(cli: &Cli, args: &ReportArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let verbose = VerboseLogger::from_flag(cli.verbose);

    // Find and load config
    let (config, config_path) = discovery::load_config(cli.config.as_deref(), &cwd)?;
    let sonar = config.sonar.settings(config_path.as_deref())?;
    let repository = git::resolve_repository(
        cli.repository.as_deref(),
        config.github.repository.as_deref(),
        &cwd,
    )?;
    let min_coverage = args.min_coverage.unwrap_or(config.coverage.min_coverage);

    // Parse output target (format and optional file path)
    let (format, file_path) = args.output_target(config.output.file.as_deref());

    // Validate --compact flag (only applies to JSON)
    if args.compact && !matches!(format, OutputFormat::Json) {
        eprintln!("prcov: warning: --compact only applies to JSON output, ignoring");
    }

    verbose.section("Connections");
    verbose.log(&format!("Analysis server: {} ({})", sonar.url, sonar.project));
    let server = SonarClient::new(&sonar.url, &sonar.project, sonar.username, sonar.password)?;
    verbose.log(&format!("GitHub: {} ({})", config.github.api_url, repository));
    let github = GitHubClient::new(&config.github.api_url, &repository, config.github.token())?;

    verbose.section("Resources");
    let mut correlator =
        CoverageCorrelator::new(&github, &server, config.coverage.exclude.clone())
            .context("failed to index analysis resources")?;
    verbose.log(&format!("{} file resources indexed", correlator.index().len()));

    verbose.section("Pull requests");
    let total = args.pull_requests.len();
    for (i, number) in args.pull_requests.iter().enumerate() {
        verbose.progress(i + 1, total, &format!("pull request #{}", number));
        correlator
            .add_pull_request(*number)
            .with_context(|| format!("failed to correlate pull request #{}", number))?;
    }
    verbose.log(&format!(
        "{} files, {} metric queries",
        correlator.table().len(),
        correlator.metrics_fetched()
    ));

    let table = correlator.into_table();
    let report = Report::new(&table, &args.pull_requests, min_coverage);

    // Write output using streaming when possible
    match file_path {
        Some(path) => {
            // File output: use buffered writer for efficiency
            let file = std::fs::File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = std::io::BufWriter::new(file);
            report::format_report_to(&mut writer, format, &report, args.compact)?;
            if matches!(format, OutputFormat::Json) {
                writeln!(writer)?;
            }
            writer.flush()?;
            verbose.log(&format!("Report written to {}", path.display()));
        }
        None => {
            // Stdout: use stdout lock for efficiency
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            report::format_report_to(&mut handle, format, &report, args.compact)?;
            // Add trailing newline for JSON output
            if matches!(format, OutputFormat::Json) {
                writeln!(handle)?;
            }
        }
    }

    if args.strict && report.summary().has_failures() {
        return Ok(ExitCode::CheckFailed);
    }
    Ok(ExitCode::Success)
}
