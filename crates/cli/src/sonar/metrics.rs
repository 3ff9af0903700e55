// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage metrics of a single analysis resource.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AnalysisServer;
use crate::error::{Error, Result};

/// Metrics requested for every resolved file, in server syntax.
pub const METRIC_KEYS: &str = "coverage,line_coverage,branch_coverage";

/// One measured value: the number used for thresholds, and the server's
/// display rendering of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measure {
    pub value: f64,
    pub formatted: String,
}

/// Coverage of one file. A field is `None` when the server has no
/// measurement for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoverageMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<Measure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_coverage: Option<Measure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_coverage: Option<Measure>,
}

impl CoverageMetrics {
    pub fn is_empty(&self) -> bool {
        self.coverage.is_none() && self.line_coverage.is_none() && self.branch_coverage.is_none()
    }

    /// Store measures by metric key.
    ///
    /// Fails on a key outside [`METRIC_KEYS`]: the server answered a
    /// different question than the one asked.
    pub fn apply(&mut self, measures: &[MeasureRecord]) -> Result<()> {
        for measure in measures {
            let slot = match measure.key.as_str() {
                "coverage" => &mut self.coverage,
                "line_coverage" => &mut self.line_coverage,
                "branch_coverage" => &mut self.branch_coverage,
                other => return Err(Error::UnknownMetric(other.to_string())),
            };
            *slot = Some(Measure {
                value: measure.val,
                formatted: measure.frmt_val.clone(),
            });
        }
        Ok(())
    }
}

/// Resource entry of a metric query response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsRecord {
    /// Measures; absent when nothing was measured.
    #[serde(default)]
    pub msr: Option<Vec<MeasureRecord>>,
}

/// Measure as sent by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct MeasureRecord {
    pub key: String,
    pub val: f64,
    pub frmt_val: String,
}

/// Fetches [`CoverageMetrics`] for resolved resources.
pub struct MetricsFetcher<'a> {
    server: &'a dyn AnalysisServer,
}

impl<'a> MetricsFetcher<'a> {
    pub fn new(server: &'a dyn AnalysisServer) -> Self {
        Self { server }
    }

    /// Query the coverage metrics of one resource.
    pub fn fetch(&self, resource_id: &str) -> Result<CoverageMetrics> {
        let records = self.server.metrics(resource_id, METRIC_KEYS)?;

        let mut metrics = CoverageMetrics::default();
        for record in &records {
            if let Some(ref measures) = record.msr {
                metrics.apply(measures)?;
            }
        }

        debug!(resource_id, measured = !metrics.is_empty(), "fetched metrics");
        Ok(metrics)
    }
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
