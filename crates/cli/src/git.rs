// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git utilities for locating the GitHub repository of a checkout.
//!
//! Uses git2 (libgit2) to read remotes without spawning `git`.

use std::path::Path;
use std::sync::LazyLock;

use git2::Repository;
use regex::Regex;

use crate::error::{Error, Result};

/// Name of the remote read when no repository is configured.
pub const DEFAULT_REMOTE: &str = "origin";

/// GitHub remote URL in https, ssh or scp-like syntax.
/// Captures:
/// - Group 1: owner
/// - Group 2: repository name (without `.git`)
#[allow(clippy::expect_used)]
static GITHUB_REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com[:/]([^/:]+)/([^/]+?)(?:\.git)?/?$").expect("valid regex")
});

/// `owner/name` of the GitHub repository behind a remote URL.
pub fn parse_github_remote(url: &str) -> Option<String> {
    let caps = GITHUB_REMOTE.captures(url.trim())?;
    Some(format!("{}/{}", &caps[1], &caps[2]))
}

/// `owner/name` of the `origin` remote of the repository containing `root`.
///
/// Returns `None` outside a repository, without an `origin` remote, or
/// when the remote does not point at GitHub.
pub fn origin_repository(root: &Path) -> Option<String> {
    let repo = Repository::discover(root).ok()?;
    let remote = repo.find_remote(DEFAULT_REMOTE).ok()?;
    parse_github_remote(remote.url()?)
}

/// Pick the repository to query.
///
/// Priority:
/// 1. `--repository`
/// 2. `[github] repository`
/// 3. the `origin` remote of the enclosing checkout
pub fn resolve_repository(
    explicit: Option<&str>,
    configured: Option<&str>,
    cwd: &Path,
) -> Result<String> {
    let repository = match explicit.or(configured) {
        Some(repo) => repo.to_string(),
        None => origin_repository(cwd).ok_or_else(|| Error::Config {
            message: "no GitHub repository: pass --repository, set [github] repository, \
                      or run inside a checkout with a GitHub origin remote"
                .to_string(),
            path: None,
        })?,
    };

    match repository.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(repository)
        }
        _ => Err(Error::Argument(format!(
            "invalid repository `{}` (expected owner/name)",
            repository
        ))),
    }
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
