// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `patternscan config` command implementation.

use std::io::Write;

use anyhow::Context;

use patternscan::SettingsSource;
use patternscan::cli::{Cli, ConfigArgs};
use patternscan::discovery;
use patternscan::error::ExitCode;
use patternscan::mask::NoMask;

use crate::cmd_scan::{load_config, resolve_root};

pub fn run(cli: &Cli, args: &ConfigArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("reading current directory")?;
    let start_dir = match &args.path {
        Some(path) => resolve_root(&cwd, path),
        None => cwd,
    };

    let config_path = discovery::resolve_config(cli.config.as_deref(), &start_dir)?;
    let config = load_config(config_path.as_deref())?;
    let no_mask = NoMask::from_settings(&config)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(
        stdout,
        "ignore_directories: {:?}",
        config.file_scan_ignore_directories()
    )?;
    writeln!(stdout, "no_mask: {}", no_mask.as_str())?;

    Ok(ExitCode::Success)
}
