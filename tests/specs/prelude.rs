//! Test helpers for behavioral specifications.
//!
//! Provides small helpers for driving the patternscan binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::fs;
use std::path::Path;
use std::process::Command;

pub use tempfile::TempDir;

/// Returns a Command configured to run the patternscan binary
pub fn patternscan_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("patternscan"));
    cmd.env_remove("PATTERNSCAN_CONFIG");
    cmd.env_remove("PATTERNSCAN_LOG");
    cmd
}

/// Creates a directory tree from a list of (path, content) pairs.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Temp component library with a `.git` marker so config discovery stops
/// at its root.
pub fn library(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    create_tree(dir.path(), files);
    dir
}
