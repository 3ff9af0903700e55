// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// prcov error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Request to a remote server failed or returned an unusable body.
    #[error("request failed: {url}: {message}")]
    Http { url: String, message: String },

    /// Analysis server resource key has no module segment.
    #[error("resource key `{key}` has not enough segments (resource id {resource_id})")]
    MalformedResource { key: String, resource_id: String },

    /// Analysis server answered with a metric that was not requested.
    #[error("unknown metric key: {0}")]
    UnknownMetric(String),

    /// Source control reported a file status outside the known set.
    #[error("unknown file status: {0}")]
    UnknownStatus(String),

    /// No milestone with the given title exists in the repository.
    #[error("milestone not found: {title} in {repository}")]
    MilestoneNotFound { title: String, repository: String },
}

impl Error {
    pub(crate) fn http(url: &str, err: impl std::fmt::Display) -> Self {
        Error::Http {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type using prcov Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Report generated
    Success = 0,
    /// At least one file is below the coverage threshold (`--strict`)
    CheckFailed = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Remote contract violation, transport or I/O failure
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::MilestoneNotFound { .. } => ExitCode::ConfigError,
            Error::Io { .. } | Error::Http { .. } => ExitCode::InternalError,
            Error::MalformedResource { .. }
            | Error::UnknownMetric(_)
            | Error::UnknownStatus(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
