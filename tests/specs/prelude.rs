//! Test helpers for behavioral specifications.
//!
//! Provides a project sandbox and a canned HTTP server standing in for the
//! analysis server and the GitHub API.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

/// Returns a Command configured to run the prcov binary
pub fn prcov_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("prcov"));
    for var in [
        "PRCOV_CONFIG",
        "PRCOV_LOG",
        "PRCOV_DEBUG",
        "PRCOV_SONAR_USERNAME",
        "PRCOV_SONAR_PASSWORD",
        "GITHUB_TOKEN",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Temporary project directory that stops config discovery at its root.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn with_config(config: &str) -> Self {
        let project = Self::empty();
        project.write("prcov.toml", config);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) {
        std::fs::write(self.file(name), content).unwrap();
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.file(name)).unwrap()
    }

    /// `prcov` running inside the project.
    pub fn cmd(&self) -> Command {
        let mut cmd = prcov_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}

/// Config pointing both remotes at `url`.
pub fn config_for(url: &str) -> String {
    format!(
        r#"version = 1

[sonar]
url = "{url}"
project = "widget"

[github]
repository = "acme/widget"
api_url = "{url}"
"#
    )
}

/// Canned answer served when the request target contains `needle`.
pub struct Route {
    needle: String,
    status: u16,
    body: String,
}

pub fn route(needle: &str, body: &str) -> Route {
    Route {
        needle: needle.to_string(),
        status: 200,
        body: body.to_string(),
    }
}

pub fn failing_route(needle: &str, status: u16) -> Route {
    Route {
        needle: needle.to_string(),
        status,
        body: r#"{"message":"error"}"#.to_string(),
    }
}

/// Loopback HTTP server answering from [`Route`]s; first match wins,
/// anything else is a 404.
pub struct Remote {
    url: String,
    targets: Arc<Mutex<Vec<String>>>,
}

impl Remote {
    pub fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let targets = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&targets);

        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let head = read_head(&mut stream);
                let target = head.split_whitespace().nth(1).unwrap_or("").to_string();
                seen.lock().unwrap().push(target.clone());

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
            }
        });

        Self { url, targets }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Request targets received so far.
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
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
