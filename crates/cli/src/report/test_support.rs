// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for report formatter tests.

// Test helpers that use unwrap for clarity (tests should panic on unexpected failures).
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::{DateTime, TimeZone, Utc};

use crate::correlate::{AggregationTable, TableEntry};
use crate::github::FileStatus;
use crate::sonar::{CoverageMetrics, Measure};
use crate::test_utils::change;

use super::{Report, ReportFormatter};

/// Fixed timestamp so rendered output is stable.
pub fn generated() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
}

fn measure(value: f64) -> Option<Measure> {
    Some(Measure {
        value,
        formatted: format!("{:.1}%", value),
    })
}

fn entry(path: &str, prs: &[u64], status: FileStatus, resource: Option<&str>) -> TableEntry {
    let mut entry = TableEntry::new(
        &change(path, "modified", 10, 8, 2),
        prs[0],
        status,
        resource.map(str::to_string),
    );
    for pr in &prs[1..] {
        entry.absorb(&change(path, "modified", 4, 3, 1), *pr, status);
    }
    entry
}

/// Table with one row per verdict:
/// - `core/src/Cache.java`: 92.3% (pass)
/// - `core/src/Map.java`: 61.0% (fail), touched by two pull requests
/// - `docs/README.md`: unresolved
/// - `core/src/Old.java`: deleted
pub fn create_test_table() -> AggregationTable {
    let mut table = AggregationTable::default();

    let mut cache = entry("core/src/Cache.java", &[12], FileStatus::Added, Some("101"));
    cache.metrics = CoverageMetrics {
        coverage: measure(92.3),
        line_coverage: measure(94.0),
        branch_coverage: measure(88.5),
    };
    table.insert(cache);

    let mut map = entry(
        "core/src/Map.java",
        &[12, 15],
        FileStatus::Modified,
        Some("102"),
    );
    map.metrics = CoverageMetrics {
        coverage: measure(61.0),
        line_coverage: measure(70.0),
        branch_coverage: None,
    };
    table.insert(map);

    table.insert(entry("docs/README.md", &[15], FileStatus::Modified, None));
    table.insert(entry(
        "core/src/Old.java",
        &[15],
        FileStatus::Deleted,
        Some("103"),
    ));

    table
}

pub const TEST_PULL_REQUESTS: &[u64] = &[12, 15];

pub fn create_test_report(table: &AggregationTable) -> Report<'_> {
    Report::new(table, TEST_PULL_REQUESTS, 87.5).with_generated(generated())
}

/// Assert that buffered and streamed output match for a formatter.
pub fn assert_buffered_matches_streamed<F: ReportFormatter>(formatter: &F, report: &Report<'_>) {
    let buffered = formatter.format(report).unwrap();
    let mut streamed = Vec::new();
    formatter.format_to(&mut streamed, report).unwrap();
    let streamed_str = String::from_utf8(streamed).unwrap();
    assert_eq!(
        buffered, streamed_str,
        "Buffered and streamed output should match"
    );
}
