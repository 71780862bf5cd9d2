// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! An object keyed by path; each value carries `uri`, `filename` and `name`.

use crate::error::{Error, Result};
use crate::scanner::ScanResult;

/// Format a scan result as pretty-printed JSON.
pub fn format_json(result: &ScanResult) -> Result<String> {
    let map: serde_json::Map<String, serde_json::Value> = result
        .iter()
        .map(|(path, info)| {
            let value = serde_json::to_value(info)
                .map_err(|e| Error::Internal(format!("serializing {}: {}", path.display(), e)))?;
            Ok((path.display().to_string(), value))
        })
        .collect::<Result<_>>()?;

    serde_json::to_string_pretty(&map).map_err(|e| Error::Internal(e.to_string()))
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
