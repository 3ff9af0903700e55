// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

/// Correlates pull request changes with per-file test coverage
#[derive(Parser)]
#[command(name = "prcov")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "PRCOV_CONFIG")]
    pub config: Option<PathBuf>,

    /// GitHub repository as owner/name (overrides config and git remote)
    #[arg(short = 'R', long, global = true, value_name = "OWNER/NAME")]
    pub repository: Option<String>,

    /// Print progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report coverage of the files changed by pull requests
    Report(ReportArgs),
    /// List merged pull requests of a milestone
    List(ListArgs),
    /// Initialize prcov configuration
    Init(InitArgs),
}

#[derive(clap::Args)]
pub struct ReportArgs {
    /// Pull request numbers, processed in the given order
    #[arg(
        short = 'p',
        long = "pull-requests",
        value_delimiter = ',',
        required = true,
        value_name = "N,..."
    )]
    pub pull_requests: Vec<u64>,

    /// Output format or file: text, markdown, json, or a .txt/.md/.json path
    #[arg(short, long, value_name = "FORMAT|FILE")]
    pub output: Option<String>,

    /// Compact JSON output (single line)
    #[arg(long)]
    pub compact: bool,

    /// Exit with status 1 when a file is below the coverage threshold
    #[arg(long)]
    pub strict: bool,

    /// Coverage percentage a file needs to pass (overrides config)
    #[arg(long, value_name = "PERCENT")]
    pub min_coverage: Option<f64>,
}

impl ReportArgs {
    /// Output format and optional file path.
    ///
    /// `--output` wins over `default_file`; without either, text on stdout.
    pub fn output_target(&self, default_file: Option<&Path>) -> (OutputFormat, Option<PathBuf>) {
        match (&self.output, default_file) {
            (Some(output), _) => parse_output_target(output),
            (None, Some(file)) => (OutputFormat::for_path(file), Some(file.to_path_buf())),
            (None, None) => (OutputFormat::Text, None),
        }
    }
}

/// Parse an `--output` value into format and optional file path.
pub fn parse_output_target(value: &str) -> (OutputFormat, Option<PathBuf>) {
    let val = value.to_lowercase();

    // Check for file extension
    if val.ends_with(".json") || val.ends_with(".md") || val.ends_with(".txt") {
        let path = PathBuf::from(value);
        (OutputFormat::for_path(&path), Some(path))
    } else {
        // Parse as format name
        let format = match val.as_str() {
            "json" => OutputFormat::Json,
            "md" | "markdown" => OutputFormat::Markdown,
            _ => OutputFormat::Text,
        };
        (format, None)
    }
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Milestone title (defaults to [github] milestone)
    #[arg(short, long)]
    pub milestone: Option<String>,

    /// Append the generated command line to this script file
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl OutputFormat {
    /// Format implied by a file extension. Unknown extensions are text.
    pub fn for_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match ext.as_deref() {
            Some("json") => OutputFormat::Json,
            Some("md") | Some("markdown") => OutputFormat::Markdown,
            _ => OutputFormat::Text,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
