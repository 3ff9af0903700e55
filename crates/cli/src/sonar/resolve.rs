// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mapping of repository paths to analysis resources.
//!
//! A repository path like `modA/src/main/Foo.java` is matched by its tail:
//! leading segments are stripped one at a time until the remainder is a
//! display name in the index. The first segment of the path is taken as the
//! module and picks the resource out of the matching bucket.
//!
//! Only the first bucket found is considered. If no resource in it belongs
//! to the path's module, the path is unresolved even when a shorter tail
//! would match a resource of the right module.

use tracing::trace;

use super::index::{AnalysisResource, ResourceIndex};

/// Resolves repository-relative file paths against a [`ResourceIndex`].
pub struct PathResolver<'a> {
    index: &'a ResourceIndex,
}

impl<'a> PathResolver<'a> {
    pub fn new(index: &'a ResourceIndex) -> Self {
        Self { index }
    }

    /// Find the analysis resource for a repository path.
    ///
    /// Returns `None` when the path has no module segment, when no tail of
    /// the path is an indexed display name, or when the first matching
    /// bucket has no resource of the path's module.
    pub fn resolve(&self, path: &str) -> Option<&'a AnalysisResource> {
        let (module, mut tail) = path.split_once('/')?;

        loop {
            if let Some(bucket) = self.index.bucket(tail) {
                let found = bucket.iter().find(|resource| resource.module == module);
                if found.is_none() {
                    trace!(path, tail, module, "display name matched, module did not");
                }
                return found;
            }
            tail = tail.split_once('/')?.1;
        }
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
