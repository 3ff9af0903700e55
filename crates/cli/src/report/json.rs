// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use serde::Serialize;

use crate::correlate::TableEntry;

use super::{Report, ReportFormatter, Summary, Verdict};

/// JSON format report formatter.
pub struct JsonFormatter {
    compact: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    ///
    /// If `compact` is true, outputs single-line JSON without whitespace.
    pub fn new(compact: bool) -> Self {
        Self { compact }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated: String,
    pull_requests: &'a [u64],
    min_coverage: f64,
    summary: Summary,
    files: Vec<JsonFile<'a>>,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    #[serde(flatten)]
    entry: &'a TableEntry,
    verdict: Verdict,
}

impl<'a> JsonReport<'a> {
    fn build(report: &Report<'a>) -> Self {
        Self {
            generated: report.generated.to_rfc3339(),
            pull_requests: report.pull_requests,
            min_coverage: report.min_coverage,
            summary: report.summary(),
            files: report
                .table
                .entries()
                .map(|entry| JsonFile {
                    entry,
                    verdict: report.verdict(entry),
                })
                .collect(),
        }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report<'_>) -> anyhow::Result<String> {
        let value = JsonReport::build(report);
        if self.compact {
            Ok(serde_json::to_string(&value)?)
        } else {
            Ok(serde_json::to_string_pretty(&value)?)
        }
    }

    fn format_to(
        &self,
        writer: &mut dyn std::io::Write,
        report: &Report<'_>,
    ) -> anyhow::Result<()> {
        let value = JsonReport::build(report);
        if self.compact {
            serde_json::to_writer(writer, &value)?;
        } else {
            serde_json::to_writer_pretty(writer, &value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
