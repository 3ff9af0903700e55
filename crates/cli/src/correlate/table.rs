// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-file aggregation of pull request touches.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::github::{FileChange, FileStatus};
use crate::sonar::CoverageMetrics;

/// Aggregated row for one file path across every processed pull request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableEntry {
    pub file_name: String,

    /// Analysis resource the path resolved to, if any.
    pub resource_id: Option<String>,

    /// Pull requests that touched the file, in processing order.
    pub pull_requests: Vec<u64>,

    /// Status reported by the most recent pull request.
    pub status: FileStatus,

    pub changes: u64,
    pub additions: u64,
    pub deletions: u64,

    pub metrics: CoverageMetrics,
}

impl TableEntry {
    /// Entry for the first sighting of a file. Metrics start empty.
    pub fn new(
        change: &FileChange,
        pull_request: u64,
        status: FileStatus,
        resource_id: Option<String>,
    ) -> Self {
        Self {
            file_name: change.path.clone(),
            resource_id,
            pull_requests: vec![pull_request],
            status,
            changes: change.changes,
            additions: change.additions,
            deletions: change.deletions,
            metrics: CoverageMetrics::default(),
        }
    }

    /// Pull request numbers joined as `"12, 15"`.
    pub fn pull_request_refs(&self) -> String {
        self.pull_requests
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Fold another touch of the same file into this entry: the status is
    /// replaced, counters are summed.
    pub fn absorb(&mut self, change: &FileChange, pull_request: u64, status: FileStatus) {
        self.pull_requests.push(pull_request);
        self.status = status;
        self.changes += change.changes;
        self.additions += change.additions;
        self.deletions += change.deletions;
    }
}

/// Result set keyed by file path. Iterates in path order.
#[derive(Debug, Default)]
pub struct AggregationTable {
    entries: BTreeMap<String, TableEntry>,
}

impl AggregationTable {
    /// Absorb a touch into an existing entry.
    ///
    /// Returns `false` when the file has not been seen yet, leaving the
    /// table unchanged.
    pub fn merge(&mut self, change: &FileChange, pull_request: u64, status: FileStatus) -> bool {
        match self.entries.get_mut(&change.path) {
            Some(entry) => {
                entry.absorb(change, pull_request, status);
                true
            }
            None => false,
        }
    }

    /// Store a new entry, replacing any entry with the same file name.
    pub fn insert(&mut self, entry: TableEntry) {
        self.entries.insert(entry.file_name.clone(), entry);
    }

    pub fn get(&self, file_name: &str) -> Option<&TableEntry> {
        self.entries.get(file_name)
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.entries.contains_key(file_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &TableEntry> {
        self.entries.values()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
