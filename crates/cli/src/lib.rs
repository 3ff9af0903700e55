// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Correlates the files changed by GitHub pull requests with their
//! per-file coverage on a SonarQube analysis server.

pub mod cli;
pub mod cmd_init;
pub mod cmd_list;
pub mod config;
pub mod correlate;
pub mod discovery;
pub mod error;
pub mod git;
pub mod github;
pub mod http;
pub mod report;
pub mod sonar;
pub mod verbose;

pub use cli::{Cli, Command, InitArgs, ListArgs, OutputFormat, ReportArgs};
pub use correlate::{AggregationTable, CoverageCorrelator, TableEntry};
pub use error::{Error, ExitCode, Result};
pub use github::{FileChange, FileStatus, SourceControl};
pub use sonar::{AnalysisServer, CoverageMetrics, PathResolver, ResourceIndex};

#[cfg(test)]
pub mod test_utils;
