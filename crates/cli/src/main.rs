// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Patternscan CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use patternscan::cli::{Cli, Command};
use patternscan::error::ExitCode;

mod cmd_config;
mod cmd_scan;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("PATTERNSCAN_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

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
            eprintln!("patternscan: {}", e);
            match e.downcast_ref::<patternscan::Error>() {
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
        Some(Command::Scan(args)) => cmd_scan::run(&cli, args),
        Some(Command::Config(args)) => cmd_config::run(&cli, args),
    }
}
