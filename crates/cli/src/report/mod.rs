// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering.
//!
//! Turns a finished [`AggregationTable`] into text, markdown, or JSON.
//! The format is picked once by the caller; formatters only read the table.

mod json;
mod markdown;
mod text;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::correlate::{AggregationTable, TableEntry};
use crate::github::FileStatus;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Placeholder for a metric the server did not measure.
pub const MISSING: &str = "-";

/// Coverage judgement for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Fail,
    /// No coverage measure (unresolved, excluded, or not analysed).
    NotMeasured,
    /// File was deleted by the pull request.
    Skipped,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
            Verdict::NotMeasured => "n/a",
            Verdict::Skipped => MISSING,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Totals shown under the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub files: usize,
    pub resolved: usize,
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {} resolved, {} passed, {} failed",
            self.files,
            if self.files == 1 { "file" } else { "files" },
            self.resolved,
            self.passed,
            self.failed
        )
    }
}

/// Everything a formatter needs to render one run.
pub struct Report<'a> {
    pub table: &'a AggregationTable,
    /// Pull requests in processing order.
    pub pull_requests: &'a [u64],
    pub min_coverage: f64,
    pub generated: DateTime<Utc>,
}

impl<'a> Report<'a> {
    pub fn new(table: &'a AggregationTable, pull_requests: &'a [u64], min_coverage: f64) -> Self {
        Self {
            table,
            pull_requests,
            min_coverage,
            generated: Utc::now(),
        }
    }

    /// Override the generation timestamp.
    pub fn with_generated(mut self, generated: DateTime<Utc>) -> Self {
        self.generated = generated;
        self
    }

    pub fn verdict(&self, entry: &TableEntry) -> Verdict {
        if entry.status == FileStatus::Deleted {
            return Verdict::Skipped;
        }
        match &entry.metrics.coverage {
            None => Verdict::NotMeasured,
            Some(measure) if measure.value >= self.min_coverage => Verdict::Pass,
            Some(_) => Verdict::Fail,
        }
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for entry in self.table.entries() {
            summary.files += 1;
            if entry.resource_id.is_some() {
                summary.resolved += 1;
            }
            match self.verdict(entry) {
                Verdict::Pass => summary.passed += 1,
                Verdict::Fail => summary.failed += 1,
                Verdict::NotMeasured | Verdict::Skipped => {}
            }
        }
        summary
    }

    /// Pull request numbers joined as `"12, 15"`.
    pub fn pull_request_list(&self) -> String {
        self.pull_requests
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Formatted value of a measure, or [`MISSING`].
pub(crate) fn formatted(measure: Option<&crate::sonar::Measure>) -> &str {
    measure.map_or(MISSING, |m| m.formatted.as_str())
}

/// Trait for rendering a [`Report`] into an output format.
pub trait ReportFormatter {
    /// Render into a string.
    fn format(&self, report: &Report<'_>) -> anyhow::Result<String>;

    /// Render directly to a writer (streaming).
    fn format_to(&self, writer: &mut dyn std::io::Write, report: &Report<'_>)
    -> anyhow::Result<()>;
}

/// Create formatter based on output format.
fn create_formatter(format: OutputFormat, compact: bool) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
        OutputFormat::Json => Box::new(JsonFormatter::new(compact)),
    }
}

/// Format a report, returning the output string.
///
/// `compact` only affects JSON (single line, no whitespace).
pub fn format_report(
    format: OutputFormat,
    report: &Report<'_>,
    compact: bool,
) -> anyhow::Result<String> {
    create_formatter(format, compact).format(report)
}

/// Format a report directly to a writer.
pub fn format_report_to(
    writer: &mut dyn std::io::Write,
    format: OutputFormat,
    report: &Report<'_>,
    compact: bool,
) -> anyhow::Result<()> {
    create_formatter(format, compact).format_to(writer, report)
}

#[cfg(test)]
pub mod test_support;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
