// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! In-memory collaborators for the correlation engine and a tiny HTTP stub
//! for the remote clients.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::github::{FileChange, SourceControl};
use crate::sonar::{AnalysisServer, MeasureRecord, MetricsRecord, ResourceRecord};

pub fn file_record(id: &str, key: &str, lname: &str) -> ResourceRecord {
    ResourceRecord {
        id: id.to_string(),
        key: key.to_string(),
        scope: "FIL".to_string(),
        lname: lname.to_string(),
    }
}

pub fn measure(key: &str, val: f64, frmt_val: &str) -> MeasureRecord {
    MeasureRecord {
        key: key.to_string(),
        val,
        frmt_val: frmt_val.to_string(),
    }
}

pub fn change(path: &str, status: &str, changes: u64, additions: u64, deletions: u64) -> FileChange {
    FileChange {
        path: path.to_string(),
        status: status.to_string(),
        changes,
        additions,
        deletions,
    }
}

/// Analysis server answering from memory and recording metric queries.
#[derive(Default)]
pub struct FakeServer {
    resources: Vec<ResourceRecord>,
    metrics: HashMap<String, Vec<MetricsRecord>>,
    calls: RefCell<Vec<(String, String)>>,
}

impl FakeServer {
    pub fn with_resources(mut self, resources: Vec<ResourceRecord>) -> Self {
        self.resources = resources;
        self
    }

    pub fn with_metrics(mut self, resource_id: &str, records: Vec<MetricsRecord>) -> Self {
        self.metrics.insert(resource_id.to_string(), records);
        self
    }

    /// Shorthand for a resource measured with all three metrics.
    pub fn with_coverage(self, resource_id: &str, coverage: f64) -> Self {
        let shown = format!("{:.1}%", coverage);
        self.with_metrics(
            resource_id,
            vec![MetricsRecord {
                msr: Some(vec![
                    measure("coverage", coverage, &shown),
                    measure("line_coverage", coverage, &shown),
                    measure("branch_coverage", coverage, &shown),
                ]),
            }],
        )
    }

    /// (resource id, metric list) of every metric query so far.
    pub fn metric_calls(&self) -> Vec<(String, String)> {
        self.calls.borrow().clone()
    }
}

impl AnalysisServer for FakeServer {
    fn resources(&self) -> Result<Vec<ResourceRecord>> {
        Ok(self.resources.clone())
    }

    fn metrics(&self, resource_id: &str, metrics: &str) -> Result<Vec<MetricsRecord>> {
        self.calls
            .borrow_mut()
            .push((resource_id.to_string(), metrics.to_string()));
        Ok(self.metrics.get(resource_id).cloned().unwrap_or_default())
    }
}

/// Source control answering from memory. Unknown pull requests fail like
/// a 404 would.
#[derive(Default)]
pub struct FakeSource {
    pulls: HashMap<u64, Vec<FileChange>>,
}

impl FakeSource {
    pub fn with_pull(mut self, number: u64, files: Vec<FileChange>) -> Self {
        self.pulls.insert(number, files);
        self
    }
}

impl SourceControl for FakeSource {
    fn pull_request_files(&self, number: u64) -> Result<Vec<FileChange>> {
        self.pulls.get(&number).cloned().ok_or_else(|| Error::Http {
            url: format!("pulls/{number}/files"),
            message: "404 Not Found".to_string(),
        })
    }
}

/// Canned answer of a [`StubServer`], picked when the request target
/// contains `needle`.
pub struct StubRoute {
    pub needle: String,
    pub status: u16,
    pub body: String,
}

impl StubRoute {
    pub fn ok(needle: &str, body: &str) -> Self {
        Self {
            needle: needle.to_string(),
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(needle: &str, status: u16, body: &str) -> Self {
        Self {
            needle: needle.to_string(),
            status,
            body: body.to_string(),
        }
    }
}

/// HTTP/1.1 server on a loopback port, one connection per request.
/// The first route whose needle matches wins; anything else is a 404.
pub struct StubServer {
    url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub fn start(routes: Vec<StubRoute>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let head = read_head(&mut stream);
                let target = head.split_whitespace().nth(1).unwrap_or("").to_string();
                seen.lock().unwrap().push(head);

                let (status, body) = routes
                    .iter()
                    .find(|r| target.contains(&r.needle))
                    .map(|r| (r.status, r.body.clone()))
                    .unwrap_or((404, r#"{"message":"Not Found"}"#.to_string()));
                let response = format!(
                    "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        Self { url, requests }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Raw request heads received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Request targets (path and query) received so far.
    pub fn targets(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|head| head.split_whitespace().nth(1).unwrap_or("").to_string())
            .collect()
    }
}

fn read_head(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
