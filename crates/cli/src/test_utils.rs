// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::scanner::ScanResult;

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
///
/// # Example
///
/// ```ignore
/// let tmp = TempDir::new().unwrap();
/// create_tree(tmp.path(), &[
///     ("button/button.ui_patterns.yml", "button: {}"),
///     ("tests/fixture.ui_patterns.yml", "fixture: {}"),
/// ]);
/// ```
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Creates a temp directory laid out like a small component library.
pub fn temp_library() -> TempDir {
    let dir = TempDir::new().unwrap();
    create_tree(
        dir.path(),
        &[
            ("button/button.ui_patterns.yml", "button:\n  label: Button\n"),
            ("card/card.ui_patterns.yml", "card:\n  label: Card\n"),
            ("card/card.html.twig", "<div></div>"),
            ("tests/fixture.ui_patterns.yml", "fixture:\n  label: Fixture\n"),
            ("node_modules/pkg/pkg.ui_patterns.yml", "pkg: {}\n"),
        ],
    );
    dir
}

/// Paths of a scan result relative to `root`, with `/` separators.
pub fn relative_paths(result: &ScanResult, root: &Path) -> Vec<String> {
    result
        .keys()
        .map(|p| relative(p, root))
        .collect()
}

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
