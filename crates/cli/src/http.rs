// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking JSON-over-HTTP helper shared by the remote collaborators.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("prcov/", env!("CARGO_PKG_VERSION"));

/// Credentials attached to every request.
#[derive(Clone, Default)]
pub enum Auth {
    #[default]
    None,
    Basic {
        username: String,
        password: Option<String>,
    },
    Bearer(String),
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Auth::None => write!(f, "None"),
            Auth::Basic { username, .. } => write!(f, "Basic({username}, ***)"),
            Auth::Bearer(_) => write!(f, "Bearer(***)"),
        }
    }
}

/// JSON client for one server.
#[derive(Debug)]
pub struct HttpClient {
    http: reqwest::blocking::Client,
    base_url: String,
    auth: Auth,
    accept: &'static str,
}

impl HttpClient {
    pub fn new(base_url: &str, auth: Auth, accept: &'static str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::http(base_url, e))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
            accept,
        })
    }

    /// Absolute URL of an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` with query parameters and decode the JSON body.
    ///
    /// Non-2xx answers are errors; nothing is retried.
    pub fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, ?query, "GET");

        let mut request = self
            .http
            .get(&url)
            .query(query)
            .header(reqwest::header::ACCEPT, self.accept);
        request = match &self.auth {
            Auth::None => request,
            Auth::Basic { username, password } => request.basic_auth(username, password.as_ref()),
            Auth::Bearer(token) => request.bearer_auth(token),
        };

        let response = request
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::http(&url, e))?;
        response.json().map_err(|e| Error::http(&url, e))
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
