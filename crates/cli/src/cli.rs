// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Discovers YAML pattern definition files in a component library
#[derive(Parser)]
#[command(name = "patternscan")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "PATTERNSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan directories for pattern definition files
    Scan(ScanArgs),
    /// Show the effective scan configuration
    Config(ConfigArgs),
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Directories to scan (default: current directory).
    /// Each one uses the patternscan.toml found above it.
    #[arg(value_name = "DIR")]
    pub paths: Vec<PathBuf>,

    /// Accepted file extension, repeatable (default: .ui_patterns.yml)
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Cap the scan depth (for debugging; scans are unlimited by default)
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,
}

#[derive(clap::Args)]
pub struct ConfigArgs {
    /// Directory to resolve the config from (default: current directory)
    #[arg(value_name = "DIR")]
    pub path: Option<PathBuf>,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
