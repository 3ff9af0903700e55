// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SonarQube web service client (`/api/resources`).

use crate::error::Result;
use crate::http::{Auth, HttpClient};

use super::{AnalysisServer, MetricsRecord, ResourceRecord};

const RESOURCES_PATH: &str = "/api/resources";

/// Blocking client for one project on a SonarQube server.
#[derive(Debug)]
pub struct SonarClient {
    http: HttpClient,
    project: String,
}

impl SonarClient {
    /// Connect to `url` for the project with resource key `project`.
    ///
    /// Requests are sent with basic auth when a username is given.
    pub fn new(
        url: &str,
        project: &str,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self> {
        let auth = match username {
            Some(username) => Auth::Basic { username, password },
            None => Auth::None,
        };
        Ok(Self {
            http: HttpClient::new(url, auth, "application/json")?,
            project: project.to_string(),
        })
    }
}

impl AnalysisServer for SonarClient {
    fn resources(&self) -> Result<Vec<ResourceRecord>> {
        self.http.get_json(
            RESOURCES_PATH,
            &[
                ("format", "json".to_string()),
                ("resource", self.project.clone()),
                ("depth", "-1".to_string()),
            ],
        )
    }

    fn metrics(&self, resource_id: &str, metrics: &str) -> Result<Vec<MetricsRecord>> {
        self.http.get_json(
            RESOURCES_PATH,
            &[
                ("format", "json".to_string()),
                ("resource", resource_id.to_string()),
                ("metrics", metrics.to_string()),
            ],
        )
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
