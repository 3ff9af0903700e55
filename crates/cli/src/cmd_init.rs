// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `prcov init` command.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::InitArgs;
use crate::discovery::CONFIG_FILE;
use crate::error::ExitCode;
use crate::git;

const TEMPLATE_HEAD: &str = r#"# prcov configuration
version = 1

[sonar]
# Analysis server and the project whose file resources are indexed.
url = "https://sonar.example.com"
project = "com.example:project"
# Credentials fall back to PRCOV_SONAR_USERNAME / PRCOV_SONAR_PASSWORD.
# username = ""
# password = ""

[github]
"#;

const TEMPLATE_TAIL: &str = r#"# api_url = "https://api.github.com"
# Token falls back to GITHUB_TOKEN.
# token = ""
# milestone = "1.0"

[coverage]
# Path prefixes reported without coverage.
exclude = []
min_coverage = 87.5

[output]
# Default report file; the extension picks the format.
# file = "coverage.md"
"#;

/// Config template, with the repository pre-filled when known.
pub fn default_template(repository: Option<&str>) -> String {
    let repository_line = match repository {
        Some(repo) => format!("repository = \"{}\"\n", repo),
        None => "# repository = \"owner/name\"\n".to_string(),
    };
    format!("{}{}{}", TEMPLATE_HEAD, repository_line, TEMPLATE_TAIL)
}

/// Run the `init` command to create a prcov.toml configuration file.
pub fn run(args: &InitArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    init_in(&cwd, args.force)
}

/// Write the template into `root`.
pub fn init_in(root: &Path, force: bool) -> Result<ExitCode> {
    let config_path = root.join(CONFIG_FILE);

    if config_path.exists() && !force {
        eprintln!("{} already exists. Use --force to overwrite.", CONFIG_FILE);
        return Ok(ExitCode::ConfigError);
    }

    let repository = git::origin_repository(root);
    std::fs::write(&config_path, default_template(repository.as_deref()))
        .with_context(|| format!("failed to write {}", config_path.display()))?;

    match repository {
        Some(repo) => println!("Created {} for {}", CONFIG_FILE, repo),
        None => println!("Created {}", CONFIG_FILE),
    }
    Ok(ExitCode::Success)
}

#[cfg(test)]
#[path = "cmd_init_tests.rs"]
mod tests;
