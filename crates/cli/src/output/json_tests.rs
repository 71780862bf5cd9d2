// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::scanner::FileInfo;
use std::path::PathBuf;

#[test]
fn keys_entries_by_path() {
    let path = PathBuf::from("/lib/card/card.ui_patterns.yml");
    let mut result = ScanResult::new();
    result.insert(path.clone(), FileInfo::from_path(path));

    let json: serde_json::Value = serde_json::from_str(&format_json(&result).unwrap()).unwrap();

    let entry = &json["/lib/card/card.ui_patterns.yml"];
    assert_eq!(entry["uri"], "/lib/card/card.ui_patterns.yml");
    assert_eq!(entry["filename"], "card.ui_patterns.yml");
    assert_eq!(entry["name"], "card.ui_patterns");
}

#[test]
fn empty_result_is_empty_object() {
    assert_eq!(format_json(&ScanResult::new()).unwrap(), "{}");
}
