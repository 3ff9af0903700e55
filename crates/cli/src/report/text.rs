// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use super::{Report, ReportFormatter, formatted};

/// Plain text formatter with aligned columns.
pub struct TextFormatter;

/// Size estimation constants for pre-allocation.
const TEXT_HEADER_SIZE: usize = 200;
const TEXT_ROW_SIZE: usize = 120;

const FILE_HEADER: &str = "FILE";
const PR_HEADER: &str = "PR";

/// Widths of the variable-length columns.
struct Widths {
    file: usize,
    pull_requests: usize,
}

impl Widths {
    fn measure(report: &Report<'_>) -> Self {
        let mut widths = Widths {
            file: FILE_HEADER.len(),
            pull_requests: PR_HEADER.len(),
        };
        for entry in report.table.entries() {
            widths.file = widths.file.max(entry.file_name.chars().count());
            widths.pull_requests = widths
                .pull_requests
                .max(entry.pull_request_refs().chars().count());
        }
        widths
    }
}

/// Write the text report. Shared by the fmt::Write and io::Write paths.
macro_rules! write_text_report {
    ($writer:expr, $report:expr) => {
        let report = $report;
        writeln!($writer, "Coverage Report")?;
        writeln!($writer, "===============")?;
        writeln!($writer, "Pull requests: {}", report.pull_request_list())?;
        writeln!(
            $writer,
            "Generated: {}",
            report.generated.format("%Y-%m-%d %H:%M UTC")
        )?;
        writeln!($writer)?;

        if report.table.is_empty() {
            writeln!($writer, "No files changed.")?;
        } else {
            let w = Widths::measure(report);
            writeln!(
                $writer,
                "{:<fw$}  {:<pw$}  {:<9}  {:>5}  {:>5}  {:>7}  {:>8}  {:>8}  {:>8}  QA",
                FILE_HEADER,
                PR_HEADER,
                "STATUS",
                "+",
                "-",
                "CHANGES",
                "COVERAGE",
                "LINE",
                "BRANCH",
                fw = w.file,
                pw = w.pull_requests,
            )?;
            for entry in report.table.entries() {
                let metrics = &entry.metrics;
                writeln!(
                    $writer,
                    "{:<fw$}  {:<pw$}  {:<9}  {:>5}  {:>5}  {:>7}  {:>8}  {:>8}  {:>8}  {}",
                    entry.file_name,
                    entry.pull_request_refs(),
                    entry.status.as_str(),
                    entry.additions,
                    entry.deletions,
                    entry.changes,
                    formatted(metrics.coverage.as_ref()),
                    formatted(metrics.line_coverage.as_ref()),
                    formatted(metrics.branch_coverage.as_ref()),
                    report.verdict(entry),
                    fw = w.file,
                    pw = w.pull_requests,
                )?;
            }
        }

        writeln!($writer)?;
        writeln!($writer, "{}", report.summary())?;
    };
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &Report<'_>) -> anyhow::Result<String> {
        use std::fmt::Write;

        let capacity = TEXT_HEADER_SIZE + report.table.len() * TEXT_ROW_SIZE;
        let mut output = String::with_capacity(capacity);
        write_text_report!(&mut output, report);
        Ok(output)
    }

    fn format_to(
        &self,
        writer: &mut dyn std::io::Write,
        report: &Report<'_>,
    ) -> anyhow::Result<()> {
        write_text_report!(writer, report);
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
