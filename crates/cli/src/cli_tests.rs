// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::panic)]

use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli() {
    Cli::command().debug_assert();
}

#[test]
fn parses_scan_with_repeated_extensions() {
    let cli = Cli::parse_from(["patternscan", "scan", "lib", "-e", ".yml", "--ext", ".yaml"]);
    let Some(Command::Scan(args)) = cli.command else {
        panic!("expected scan command");
    };
    assert_eq!(args.paths, vec![PathBuf::from("lib")]);
    assert_eq!(args.extensions, vec![".yml", ".yaml"]);
    assert!(args.max_depth.is_none());
}

#[test]
fn config_flag_is_global() {
    let cli = Cli::parse_from(["patternscan", "scan", "-C", "custom.toml"]);
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
}

#[test]
fn rejects_unknown_output_format() {
    assert!(Cli::try_parse_from(["patternscan", "scan", "-o", "html"]).is_err());
}
