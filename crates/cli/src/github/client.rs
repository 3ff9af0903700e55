// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! GitHub REST API client.
//!
//! Listing endpoints are paged with `per_page=100`; paging stops at the
//! first short page.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, Result};
use crate::http::{Auth, HttpClient};

use super::{FileChange, SourceControl};

/// Page size for listing endpoints (GitHub maximum).
const PAGE_SIZE: usize = 100;

const ACCEPT: &str = "application/vnd.github+json";

/// A repository milestone.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Milestone {
    pub number: u64,
    pub title: String,
}

#[derive(Deserialize)]
struct Issue {
    number: u64,
    #[serde(default)]
    pull_request: Option<IssuePullRequest>,
}

#[derive(Deserialize)]
struct IssuePullRequest {
    #[serde(default)]
    merged_at: Option<String>,
}

/// Blocking client for one repository.
#[derive(Debug)]
pub struct GitHubClient {
    http: HttpClient,
    repository: String,
}

impl GitHubClient {
    /// Connect to `api_url` for `repository` (`owner/name`).
    pub fn new(api_url: &str, repository: &str, token: Option<String>) -> Result<Self> {
        let auth = token.map(Auth::Bearer).unwrap_or_default();
        Ok(Self {
            http: HttpClient::new(api_url, auth, ACCEPT)?,
            repository: repository.to_string(),
        })
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Find a milestone by exact title, open or closed.
    pub fn find_milestone(&self, title: &str) -> Result<Milestone> {
        let milestones: Vec<Milestone> = self.get_paged(
            &format!("/repos/{}/milestones", self.repository),
            &[("state", "all".to_string())],
        )?;

        milestones
            .into_iter()
            .find(|m| m.title == title)
            .ok_or_else(|| Error::MilestoneNotFound {
                title: title.to_string(),
                repository: self.repository.clone(),
            })
    }

    /// Numbers of the merged pull requests of a milestone, ascending.
    pub fn merged_pull_requests(&self, milestone: &Milestone) -> Result<Vec<u64>> {
        let issues: Vec<Issue> = self.get_paged(
            &format!("/repos/{}/issues", self.repository),
            &[
                ("milestone", milestone.number.to_string()),
                ("state", "closed".to_string()),
            ],
        )?;

        let mut numbers: Vec<u64> = issues
            .into_iter()
            .filter(|issue| {
                issue
                    .pull_request
                    .as_ref()
                    .is_some_and(|pr| pr.merged_at.is_some())
            })
            .map(|issue| issue.number)
            .collect();
        numbers.sort_unstable();

        debug!(milestone = %milestone.title, merged = numbers.len(), "listed merged pull requests");
        Ok(numbers)
    }

    fn get_paged<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page = 1usize;

        loop {
            let mut paged = query.to_vec();
            paged.push(("per_page", PAGE_SIZE.to_string()));
            paged.push(("page", page.to_string()));

            let batch: Vec<T> = self.http.get_json(path, &paged)?;
            let last = batch.len() < PAGE_SIZE;
            items.extend(batch);
            if last {
                return Ok(items);
            }
            page += 1;
        }
    }
}

impl SourceControl for GitHubClient {
    fn pull_request_files(&self, number: u64) -> Result<Vec<FileChange>> {
        self.get_paged(
            &format!("/repos/{}/pulls/{}/files", self.repository, number),
            &[],
        )
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
