// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! prcov CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use prcov::cli::{Cli, Command};
use prcov::error::ExitCode;

mod cmd_report;

fn init_logging() {
    let filter = EnvFilter::try_from_env("PRCOV_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("prcov: {:#}", e);
            match e.downcast_ref::<prcov::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Report(args)) => cmd_report::run(&cli, args),
        Some(Command::List(args)) => prcov::cmd_list::run(&cli, args),
        Some(Command::Init(args)) => prcov::cmd_init::run(args),
    }
}
