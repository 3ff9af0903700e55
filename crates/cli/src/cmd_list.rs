// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `prcov list` command.
//!
//! Prints the `prcov report` invocation covering every merged pull request
//! of a milestone, optionally appending it to a script.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::{Cli, ListArgs};
use crate::discovery;
use crate::error::{Error, ExitCode};
use crate::git;
use crate::github::GitHubClient;
use crate::verbose::VerboseLogger;

/// Report file name for a milestone, e.g. `3.8-coverage.md`.
pub fn report_file_name(milestone: &str) -> String {
    let stem: String = milestone
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() || c == '/' { '-' } else { c })
        .collect();
    format!("{}-coverage.md", stem)
}

/// Report destination for a milestone: the configured `[output] file`,
/// else the milestone's own file name.
pub fn output_file(configured: Option<&Path>, milestone: &str) -> String {
    match configured {
        Some(path) => path.display().to_string(),
        None => report_file_name(milestone),
    }
}

/// `prcov report` command line for the given pull requests.
///
/// `repository` is only passed through when it was given explicitly.
pub fn report_command(pull_requests: &[u64], output: &str, repository: Option<&str>) -> String {
    let numbers = pull_requests
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",");
    let mut line = format!("prcov report --pull-requests {} -o {}", numbers, output);
    if let Some(repo) = repository {
        line.push_str(" --repository ");
        line.push_str(repo);
    }
    line
}

/// Append one line to `path`, creating the file if needed.
pub fn append_script(path: &Path, line: &str) -> crate::Result<()> {
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error)?;
    writeln!(file, "{}", line).map_err(io_error)
}

/// Command line for a milestone's merged pull requests, or `None` when
/// the milestone has none.
pub fn list_milestone(
    client: &GitHubClient,
    milestone: &str,
    configured_output: Option<&Path>,
    explicit_repository: Option<&str>,
) -> crate::Result<Option<String>> {
    let milestone = client.find_milestone(milestone)?;
    let pulls = client.merged_pull_requests(&milestone)?;
    if pulls.is_empty() {
        return Ok(None);
    }
    Ok(Some(report_command(
        &pulls,
        &output_file(configured_output, &milestone.title),
        explicit_repository,
    )))
}

/// Run the `list` command.
pub fn run(cli: &Cli, args: &ListArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let verbose = VerboseLogger::from_flag(cli.verbose);

    let (config, _) = discovery::load_config(cli.config.as_deref(), &cwd)?;
    let milestone = args
        .milestone
        .as_deref()
        .or(config.github.milestone.as_deref())
        .ok_or_else(|| {
            Error::Argument("no milestone: pass --milestone or set [github] milestone".to_string())
        })?;
    let repository = git::resolve_repository(
        cli.repository.as_deref(),
        config.github.repository.as_deref(),
        &cwd,
    )?;

    verbose.log(&format!("Connecting to GitHub ({})", repository));
    let client = GitHubClient::new(&config.github.api_url, &repository, config.github.token())?;

    verbose.log(&format!("Listing merged pull requests of {}", milestone));
    let Some(line) = list_milestone(
        &client,
        milestone,
        config.output.file.as_deref(),
        cli.repository.as_deref(),
    )? else {
        println!("No pull requests have been found for milestone {}", milestone);
        return Ok(ExitCode::Success);
    };

    println!("{}", line);
    if let Some(ref script) = args.script {
        append_script(script, &line)
            .with_context(|| format!("failed to update {}", script.display()))?;
        verbose.log(&format!("Appended to {}", script.display()));
    }
    Ok(ExitCode::Success)
}

#[cfg(test)]
#[path = "cmd_list_tests.rs"]
mod tests;
