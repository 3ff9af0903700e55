// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Analysis server (SonarQube) collaborator.
//!
//! The correlation engine only talks to the server through [`AnalysisServer`],
//! which exposes the two queries it needs:
//! - a bulk listing of every resource in the project, used once to build
//!   the [`ResourceIndex`]
//! - a per-resource metric query, used by [`MetricsFetcher`]

mod client;
mod index;
mod metrics;
mod resolve;

pub use client::SonarClient;
pub use index::{AnalysisResource, FILE_SCOPE, ResourceIndex, ResourceRecord};
pub use metrics::{
    CoverageMetrics, METRIC_KEYS, Measure, MeasureRecord, MetricsFetcher, MetricsRecord,
};
pub use resolve::PathResolver;

use crate::error::Result;

/// Queries an analysis server answers for the correlation engine.
pub trait AnalysisServer {
    /// List every resource of the configured project, at any depth.
    fn resources(&self) -> Result<Vec<ResourceRecord>>;

    /// Fetch the given comma-separated metrics for one resource.
    fn metrics(&self, resource_id: &str, metrics: &str) -> Result<Vec<MetricsRecord>>;
}
