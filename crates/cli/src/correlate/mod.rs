// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Correlation of pull request changes with coverage metrics.
//!
//! For every changed file of every pull request:
//! 1. resolve the path to an analysis resource (may fail, not an error)
//! 2. fold repeated touches of a path into its existing entry
//! 3. on first sighting, fetch metrics unless the path is unresolved or
//!    excluded
//!
//! Metrics are fetched at most once per path across the whole run.

mod table;

use tracing::{debug, info};

use crate::error::Result;
use crate::github::{FileStatus, SourceControl};
use crate::sonar::{AnalysisServer, MetricsFetcher, PathResolver, ResourceIndex};

pub use table::{AggregationTable, TableEntry};

/// Builds the [`AggregationTable`] for a sequence of pull requests.
pub struct CoverageCorrelator<'a> {
    source: &'a dyn SourceControl,
    fetcher: MetricsFetcher<'a>,
    index: ResourceIndex,
    exclude: Vec<String>,
    table: AggregationTable,
    fetched: usize,
}

impl<'a> CoverageCorrelator<'a> {
    /// Index the analysis server's resources and start an empty table.
    ///
    /// Paths starting with one of the `exclude` prefixes are reported
    /// without metrics.
    pub fn new(
        source: &'a dyn SourceControl,
        server: &'a dyn AnalysisServer,
        exclude: Vec<String>,
    ) -> Result<Self> {
        let records = server.resources()?;
        let index = ResourceIndex::build(&records)?;
        info!(
            records = records.len(),
            files = index.len(),
            "indexed analysis resources"
        );
        Ok(Self::with_index(source, server, index, exclude))
    }

    /// Start from an already built index.
    pub fn with_index(
        source: &'a dyn SourceControl,
        server: &'a dyn AnalysisServer,
        index: ResourceIndex,
        exclude: Vec<String>,
    ) -> Self {
        Self {
            source,
            fetcher: MetricsFetcher::new(server),
            index,
            exclude,
            table: AggregationTable::default(),
            fetched: 0,
        }
    }

    /// Fold the changed files of one pull request into the table.
    pub fn add_pull_request(&mut self, number: u64) -> Result<()> {
        let files = self.source.pull_request_files(number)?;
        debug!(pull_request = number, files = files.len(), "correlating pull request");

        let resolver = PathResolver::new(&self.index);
        for change in &files {
            let status: FileStatus = change.status.parse()?;
            let resource_id = resolver.resolve(&change.path).map(|r| r.resource_id.clone());

            if self.table.merge(change, number, status) {
                continue;
            }

            let mut entry = TableEntry::new(change, number, status, resource_id);
            match entry.resource_id.as_deref() {
                Some(id) if !self.is_excluded(&change.path) => {
                    entry.metrics = self.fetcher.fetch(id)?;
                    self.fetched += 1;
                }
                Some(_) => debug!(path = %change.path, "excluded from metrics"),
                None => debug!(path = %change.path, "no analysis resource"),
            }
            self.table.insert(entry);
        }
        Ok(())
    }

    /// Whether a path matches a configured exclusion prefix.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclude.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }

    pub fn index(&self) -> &ResourceIndex {
        &self.index
    }

    pub fn table(&self) -> &AggregationTable {
        &self.table
    }

    /// Number of metric queries issued so far.
    pub fn metrics_fetched(&self) -> usize {
        self.fetched
    }

    pub fn into_table(self) -> AggregationTable {
        self.table
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
