// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose progress output.
//!
//! Writes `[verbose]` prefixed lines to stderr. Enabled with `--verbose`
//! or `PRCOV_DEBUG=1`. Structured diagnostics go through `tracing`
//! (`PRCOV_LOG`) instead.

/// Environment variable that turns verbose output on.
pub const DEBUG_ENV: &str = "PRCOV_DEBUG";

/// Verbose output logger. Writes to stderr with a `[verbose]` prefix.
/// All output is conditional on verbose mode being enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Enabled by the command-line flag or by [`DEBUG_ENV`].
    pub fn from_flag(verbose: bool) -> Self {
        Self::new(verbose || env_enabled(std::env::var(DEBUG_ENV).ok().as_deref()))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a verbose line to stderr.
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("[verbose] {}", msg);
        }
    }

    /// Print a verbose section header.
    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("[verbose] === {} ===", title);
        }
    }

    /// Print a counted step, e.g. `(2/5) pull request #15`.
    pub fn progress(&self, current: usize, total: usize, msg: &str) {
        if self.enabled {
            eprintln!("[verbose] {}", progress_line(current, total, msg));
        }
    }
}

fn progress_line(current: usize, total: usize, msg: &str) -> String {
    format!("({}/{}) {}", current, total, msg)
}

fn env_enabled(value: Option<&str>) -> bool {
    matches!(value, Some("1") | Some("true"))
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
