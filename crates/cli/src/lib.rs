// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Discovery of YAML pattern definition files.

pub mod cli;
pub mod config;
pub mod deriver;
pub mod discovery;
pub mod error;
pub mod mask;
pub mod output;
pub mod scanner;

pub use cli::{Cli, Command, ConfigArgs, OutputFormat, ScanArgs};
pub use config::{Config, SettingsSource, StaticSettings};
pub use deriver::{DEFAULT_EXTENSIONS, YamlPatternsDeriver};
pub use error::{Error, ExitCode, Result};
pub use mask::{ALWAYS_IGNORED_DIRECTORY, FileMask, NoMask};
pub use scanner::{DirectoryScanner, FileInfo, FsScanner, ScanDepth, ScanResult, ScanStats};

#[cfg(test)]
pub mod test_utils;
