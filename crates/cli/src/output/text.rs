// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! One line per discovered file: `name<TAB>path`, with the path shown
//! relative to the scanned root when possible.

use std::fmt::Write;
use std::path::Path;

use crate::scanner::ScanResult;

/// Format a scan result as text lines.
pub fn format_text(result: &ScanResult, root: &Path) -> String {
    let mut out = String::new();
    for (path, info) in result {
        let shown = path.strip_prefix(root).unwrap_or(path);
        let _ = writeln!(out, "{}\t{}", info.name, shown.display());
    }
    out
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
