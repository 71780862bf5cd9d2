// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Each scan root resolves its own patternscan.toml, found by walking up to
//! the git root. Roots that land on the same file share one config group, so
//! a library checkout and a vendored theme can carry different ignore lists.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::error::{Error, Result};

/// Find patternscan.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }

        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "PATTERNSCAN_CONFIG")
/// 2. Discovery from `start_dir` up to git root
/// 3. None (use defaults)
pub fn resolve_config(explicit: Option<&Path>, start_dir: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            if path.exists() {
                Ok(Some(path.to_path_buf()))
            } else {
                Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                })
            }
        }
        None => Ok(find_config(start_dir)),
    }
}

/// Scan roots that share one config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootGroup {
    /// Config file for these roots; `None` means defaults.
    pub config: Option<PathBuf>,
    /// Roots in the order they were given.
    pub roots: Vec<PathBuf>,
}

/// Group `roots` by the config each one resolves to.
///
/// An explicit config applies to every root. Groups keep the order in which
/// their first root appeared.
pub fn group_roots_by_config(
    explicit: Option<&Path>,
    roots: &[PathBuf],
) -> Result<Vec<RootGroup>> {
    let mut groups: Vec<RootGroup> = Vec::new();
    for root in roots {
        let config = resolve_config(explicit, root)?;
        match groups.iter_mut().find(|g| g.config == config) {
            Some(group) => group.roots.push(root.clone()),
            None => groups.push(RootGroup {
                config,
                roots: vec![root.clone()],
            }),
        }
    }
    Ok(groups)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
