// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles prcov.toml parsing with version validation and unknown key warnings.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Environment variable: analysis server username.
pub const SONAR_USERNAME_ENV: &str = "PRCOV_SONAR_USERNAME";
/// Environment variable: analysis server password.
pub const SONAR_PASSWORD_ENV: &str = "PRCOV_SONAR_PASSWORD";
/// Environment variable: GitHub API token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Analysis server connection.
    #[serde(default)]
    pub sonar: SonarConfig,

    /// Source control connection.
    #[serde(default)]
    pub github: GitHubConfig,

    /// Coverage evaluation settings.
    #[serde(default)]
    pub coverage: CoverageConfig,

    /// Report destination.
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[sonar]` section.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SonarConfig {
    /// Server base URL, e.g. `https://sonar.example.com`.
    pub url: Option<String>,

    /// Project resource key.
    pub project: Option<String>,

    pub username: Option<String>,

    pub password: Option<String>,
}

/// Resolved analysis server connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SonarSettings {
    pub url: String,
    pub project: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl SonarConfig {
    /// Resolve required fields, falling back to the environment for
    /// credentials.
    pub fn settings(&self, path: Option<&Path>) -> Result<SonarSettings> {
        let required = |value: &Option<String>, key: &str| {
            value.clone().ok_or_else(|| Error::Config {
                message: format!("missing required field: sonar.{}", key),
                path: path.map(Path::to_path_buf),
            })
        };

        Ok(SonarSettings {
            url: required(&self.url, "url")?,
            project: required(&self.project, "project")?,
            username: self
                .username
                .clone()
                .or_else(|| std::env::var(SONAR_USERNAME_ENV).ok()),
            password: self
                .password
                .clone()
                .or_else(|| std::env::var(SONAR_PASSWORD_ENV).ok()),
        })
    }
}

/// `[github]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubConfig {
    /// Repository as `owner/name`.
    pub repository: Option<String>,

    /// REST API base URL.
    #[serde(default = "GitHubConfig::default_api_url")]
    pub api_url: String,

    pub token: Option<String>,

    /// Default milestone for `prcov list`.
    pub milestone: Option<String>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            repository: None,
            api_url: Self::default_api_url(),
            token: None,
            milestone: None,
        }
    }
}

impl GitHubConfig {
    pub(crate) fn default_api_url() -> String {
        "https://api.github.com".to_string()
    }

    /// Configured token, else `GITHUB_TOKEN`.
    pub fn token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| std::env::var(GITHUB_TOKEN_ENV).ok())
    }
}

/// `[coverage]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CoverageConfig {
    /// Path prefixes whose files are reported without metrics.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Coverage percentage a file needs to pass.
    #[serde(default = "CoverageConfig::default_min_coverage")]
    pub min_coverage: f64,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            min_coverage: Self::default_min_coverage(),
        }
    }
}

impl CoverageConfig {
    pub(crate) fn default_min_coverage() -> f64 {
        87.5
    }
}

/// `[output]` section.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OutputConfig {
    /// Default report file (format from extension).
    pub file: Option<PathBuf>,
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "sonar", "github", "coverage", "output"];

/// Known keys per section.
const KNOWN_SECTION_KEYS: &[(&str, &[&str])] = &[
    ("sonar", &["url", "project", "username", "password"]),
    ("github", &["repository", "api_url", "token", "milestone"]),
    ("coverage", &["exclude", "min_coverage"]),
    ("output", &["file"]),
];

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse(&content, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse_with_warnings(&content, path)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| config_error(e, path))?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade prcov to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    // Parse full config
    toml::from_str(content).map_err(|e| config_error(e, path))
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let config = parse(content, path)?;

    let table: toml::Table = toml::from_str(content).map_err(|e| config_error(e, path))?;
    for key in unknown_keys(&table) {
        warn_unknown_key(path, &key);
    }

    Ok(config)
}

/// Dotted names of keys prcov does not know, sorted.
pub(crate) fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut unknown = Vec::new();

    for (key, value) in table {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown.push(key.clone());
            continue;
        }

        let known = KNOWN_SECTION_KEYS
            .iter()
            .find(|(section, _)| *section == key.as_str())
            .map(|(_, keys)| *keys);
        if let (Some(known), toml::Value::Table(section)) = (known, value) {
            for field in section.keys() {
                if !known.contains(&field.as_str()) {
                    unknown.push(format!("{}.{}", key, field));
                }
            }
        }
    }

    unknown
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "prcov: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

fn config_error(err: toml::de::Error, path: &Path) -> Error {
    Error::Config {
        message: err.to_string(),
        path: Some(path.to_path_buf()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
