// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for configuration.

use std::path::Path;

/// Parse a TOML array of strings into a Vec<String>.
///
/// Non-string entries are dropped.
pub(super) fn parse_string_array(value: Option<&toml::Value>) -> Option<Vec<String>> {
    value?.as_array().map(|arr| {
        arr.iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect()
    })
}

/// Parse a TOML array of strings, returning empty vec if not found.
pub(super) fn parse_string_array_or_empty(value: Option<&toml::Value>) -> Vec<String> {
    parse_string_array(value).unwrap_or_default()
}

pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "patternscan: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}
