// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Source control (GitHub) collaborator.

mod client;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use client::{GitHubClient, Milestone};

/// Pull request data the correlation engine reads.
pub trait SourceControl {
    /// Files changed by a pull request, in the order the server lists them.
    fn pull_request_files(&self, number: u64) -> Result<Vec<FileChange>>;
}

/// A file touched by a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileChange {
    /// Repository-relative path (the new path for renames).
    #[serde(rename = "filename")]
    pub path: String,

    /// Raw status string, see [`FileStatus`].
    pub status: String,

    #[serde(default)]
    pub changes: u64,

    #[serde(default)]
    pub additions: u64,

    #[serde(default)]
    pub deletions: u64,
}

/// How a pull request touched a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
    Copied,
    Changed,
    Unchanged,
}

impl FileStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FileStatus::Added => "ADDED",
            FileStatus::Modified => "MODIFIED",
            FileStatus::Deleted => "DELETED",
            FileStatus::Renamed => "RENAMED",
            FileStatus::Copied => "COPIED",
            FileStatus::Changed => "CHANGED",
            FileStatus::Unchanged => "UNCHANGED",
        }
    }
}

impl FromStr for FileStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "added" => Ok(FileStatus::Added),
            "modified" => Ok(FileStatus::Modified),
            "removed" => Ok(FileStatus::Deleted),
            "renamed" => Ok(FileStatus::Renamed),
            "copied" => Ok(FileStatus::Copied),
            "changed" => Ok(FileStatus::Changed),
            "unchanged" => Ok(FileStatus::Unchanged),
            other => Err(Error::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
