// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Index of file-level analysis resources, keyed by display name.
//!
//! The same file name can exist in several modules, so every name maps to a
//! bucket of resources. The module of a resource is the second-to-last
//! colon-delimited segment of its key, e.g. `com.acme:core:src/Foo.java`
//! belongs to module `core`.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::error::{Error, Result};

/// Scope of file-level resources. Directories, packages and modules are
/// listed by the server too but never indexed.
pub const FILE_SCOPE: &str = "FIL";

/// Resource as listed by the analysis server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceRecord {
    /// Server-side id. Older servers send a number, newer ones a string.
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,

    /// Composite key (`project:module:path`).
    pub key: String,

    /// Resource scope (`PRJ`, `DIR`, `FIL`, ...).
    pub scope: String,

    /// Long name, the path of the file inside its module.
    #[serde(default)]
    pub lname: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

fn id_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

/// A file known to the analysis server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResource {
    pub resource_id: String,
    pub display_name: String,
    pub module: String,
}

/// File-level resources grouped by display name.
#[derive(Debug, Default)]
pub struct ResourceIndex {
    buckets: HashMap<String, Vec<AnalysisResource>>,
    len: usize,
}

impl ResourceIndex {
    /// Build the index from the server's resource listing.
    ///
    /// Records outside [`FILE_SCOPE`] are skipped. A file-level record whose
    /// key has no module segment aborts the build.
    pub fn build<'a, I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a ResourceRecord>,
    {
        let mut index = Self::default();
        let mut skipped = 0usize;

        for record in records {
            if record.scope != FILE_SCOPE {
                skipped += 1;
                continue;
            }

            let module = module_of(&record.key).ok_or_else(|| Error::MalformedResource {
                key: record.key.clone(),
                resource_id: record.id.clone(),
            })?;

            index.insert(AnalysisResource {
                resource_id: record.id.clone(),
                display_name: record.lname.clone(),
                module: module.to_string(),
            });
        }

        debug!(
            files = index.len,
            names = index.buckets.len(),
            skipped,
            "built resource index"
        );
        Ok(index)
    }

    /// Add a resource to the bucket of its display name.
    pub fn insert(&mut self, resource: AnalysisResource) {
        self.buckets
            .entry(resource.display_name.clone())
            .or_default()
            .push(resource);
        self.len += 1;
    }

    /// Resources sharing the given display name, if any.
    pub fn bucket(&self, display_name: &str) -> Option<&[AnalysisResource]> {
        self.buckets
            .get(display_name)
            .map(Vec::as_slice)
            .filter(|bucket| !bucket.is_empty())
    }

    /// Number of indexed resources (not distinct names).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Second-to-last colon-delimited segment of a resource key.
fn module_of(key: &str) -> Option<&str> {
    // Trailing separators carry no segment.
    let segments: Vec<&str> = key.trim_end_matches(':').split(':').collect();
    if segments.len() < 2 {
        return None;
    }
    Some(segments[segments.len() - 2])
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
