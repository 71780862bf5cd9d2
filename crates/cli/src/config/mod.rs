// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles patternscan.toml parsing with version validation and unknown key
//! warnings, and exposes the file scan ignore list through [`SettingsSource`].

mod parse;

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use parse::{parse_string_array_or_empty, warn_unknown_key};

/// Read access to the settings a scan consults.
///
/// Scanning code takes this as an explicit dependency instead of reaching
/// into process-wide state, so tests can pass an in-memory source.
pub trait SettingsSource {
    /// Directory names to prune from file scans. Empty when unset.
    fn file_scan_ignore_directories(&self) -> Vec<String>;
}

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    file_scan: Option<toml::Value>,

    #[serde(flatten)]
    unknown: std::collections::BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// File scan configuration.
    #[serde(default)]
    pub file_scan: FileScanConfig,
}

/// `[file_scan]` table.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileScanConfig {
    /// Directory names skipped during scans (e.g. "node_modules").
    #[serde(default)]
    pub ignore_directories: Vec<String>,
}

impl SettingsSource for Config {
    fn file_scan_ignore_directories(&self) -> Vec<String> {
        self.file_scan.ignore_directories.clone()
    }
}

/// In-memory settings, for embedding and tests.
#[derive(Debug, Default, Clone)]
pub struct StaticSettings {
    ignore_directories: Vec<String>,
}

impl StaticSettings {
    pub fn new(ignore_directories: Vec<String>) -> Self {
        Self { ignore_directories }
    }
}

impl SettingsSource for StaticSettings {
    fn file_scan_ignore_directories(&self) -> Vec<String> {
        self.ignore_directories.clone()
    }
}

impl<T: SettingsSource + ?Sized> SettingsSource for &T {
    fn file_scan_ignore_directories(&self) -> Vec<String> {
        (**self).file_scan_ignore_directories()
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Config file name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "patternscan.toml";

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "file_scan"];

/// Known `[file_scan]` keys in the config.
const KNOWN_FILE_SCAN_KEYS: &[&str] = &["ignore_directories"];

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = read_config(path)?;
    parse(&content, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = read_config(path)?;
    parse_with_warnings(&content, path)
}

fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn config_error(message: impl Into<String>, path: &Path) -> Error {
    Error::Config {
        message: message.into(),
        path: Some(path.to_path_buf()),
    }
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string(), path))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error("missing required field: version", path))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(
            format!(
                "unsupported config version {} (supported: {})\n  Upgrade patternscan to use this config.",
                version, SUPPORTED_VERSION
            ),
            path,
        ));
    }

    toml::from_str(content).map_err(|e| config_error(e.to_string(), path))
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string(), path))?;

    if flexible.version != SUPPORTED_VERSION {
        return Err(config_error(
            format!(
                "unsupported config version {} (supported: {})",
                flexible.version, SUPPORTED_VERSION
            ),
            path,
        ));
    }

    let mut unknown_keys = BTreeSet::new();
    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown_keys.insert(key.clone());
        }
    }
    for key in &unknown_keys {
        warn_unknown_key(path, key);
    }

    let file_scan = match flexible.file_scan {
        Some(toml::Value::Table(t)) => {
            for key in t.keys() {
                if !KNOWN_FILE_SCAN_KEYS.contains(&key.as_str()) {
                    warn_unknown_key(path, &format!("file_scan.{}", key));
                }
            }

            FileScanConfig {
                ignore_directories: parse_string_array_or_empty(t.get("ignore_directories")),
            }
        }
        _ => FileScanConfig::default(),
    };

    Ok(Config {
        version: flexible.version,
        file_scan,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
