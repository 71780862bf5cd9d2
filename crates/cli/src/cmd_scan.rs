// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `patternscan scan` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;

use patternscan::YamlPatternsDeriver;
use patternscan::cli::{Cli, OutputFormat, ScanArgs};
use patternscan::config::{self, Config};
use patternscan::discovery;
use patternscan::error::ExitCode;
use patternscan::output::{format_json, format_text};
use patternscan::scanner::{FsScanner, ScanDepth, ScanResult};

/// Load `path`, or defaults when no config was found.
pub(crate) fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load_with_warnings(path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };
    Ok(config)
}

pub(crate) fn resolve_root(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

pub fn run(cli: &Cli, args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("reading current directory")?;

    let roots: Vec<PathBuf> = if args.paths.is_empty() {
        vec![cwd.clone()]
    } else {
        args.paths.iter().map(|p| resolve_root(&cwd, p)).collect()
    };

    let scanner = match args.max_depth {
        Some(depth) => FsScanner::with_depth_cap(ScanDepth::Limited(depth)),
        None => FsScanner::new(),
    };

    let mut stdout = std::io::stdout().lock();
    let mut merged = ScanResult::new();

    for group in discovery::group_roots_by_config(cli.config.as_deref(), &roots)? {
        let config = load_config(group.config.as_deref())?;
        let mut deriver = YamlPatternsDeriver::new(&scanner, config);
        if !args.extensions.is_empty() {
            deriver = deriver.with_extensions(args.extensions.clone());
        }

        match args.output {
            OutputFormat::Text => {
                for root in &group.roots {
                    let result = deriver.file_scan_directory(root)?;
                    write!(stdout, "{}", format_text(&result, root))?;
                }
            }
            OutputFormat::Json => merged.extend(deriver.file_scan_directories(&group.roots)?),
        }
    }

    if let OutputFormat::Json = args.output {
        writeln!(stdout, "{}", format_json(&merged)?)?;
    }

    Ok(ExitCode::Success)
}
