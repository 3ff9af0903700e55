// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown format report output.

use super::{Report, ReportFormatter, formatted};

/// Markdown format report formatter.
pub struct MarkdownFormatter;

/// File name as a table cell.
///
/// Rendered as a code span with `|` escaped; a name holding a backtick
/// cannot sit in a code span and becomes escaped plain text instead.
pub(super) fn file_cell(name: &str) -> String {
    if !name.contains('`') {
        return format!("`{}`", name.replace('|', "\\|"));
    }
    let mut cell = String::with_capacity(name.len() + 8);
    for c in name.chars() {
        if matches!(c, '\\' | '`' | '|' | '*' | '_') {
            cell.push('\\');
        }
        cell.push(c);
    }
    cell
}

/// Write markdown report content. This macro handles the common formatting logic
/// for both fmt::Write (String) and io::Write (stdout, files).
macro_rules! write_markdown_report {
    ($writer:expr, $report:expr) => {
        let report = $report;
        writeln!($writer, "# Coverage Report\n")?;
        writeln!(
            $writer,
            "**Pull requests:** {} ({})\n",
            report.pull_request_list(),
            report.generated.format("%Y-%m-%d")
        )?;

        if report.table.is_empty() {
            writeln!($writer, "*No files changed.*")?;
        } else {
            writeln!(
                $writer,
                "| File | PR | Status | + | - | Changes | Coverage | Line | Branch | QA |"
            )?;
            writeln!(
                $writer,
                "|------|----|--------|--:|--:|--------:|---------:|-----:|-------:|:--:|"
            )?;
            for entry in report.table.entries() {
                let metrics = &entry.metrics;
                writeln!(
                    $writer,
                    "| {} | {} | {} | {} | {} | {} | {} | {} | {} | {} |",
                    file_cell(&entry.file_name),
                    entry.pull_request_refs(),
                    entry.status,
                    entry.additions,
                    entry.deletions,
                    entry.changes,
                    formatted(metrics.coverage.as_ref()),
                    formatted(metrics.line_coverage.as_ref()),
                    formatted(metrics.branch_coverage.as_ref()),
                    report.verdict(entry),
                )?;
            }
        }

        let summary = report.summary();
        writeln!(
            $writer,
            "\n**{}**, minimum coverage {:.1}%",
            summary, report.min_coverage
        )?;
    };
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &Report<'_>) -> anyhow::Result<String> {
        use std::fmt::Write;

        let mut output = String::with_capacity(512 + report.table.len() * 128);
        write_markdown_report!(&mut output, report);
        Ok(output)
    }

    fn format_to(
        &self,
        writer: &mut dyn std::io::Write,
        report: &Report<'_>,
    ) -> anyhow::Result<()> {
        write_markdown_report!(writer, report);
        Ok(())
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
