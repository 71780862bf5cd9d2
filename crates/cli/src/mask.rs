// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filename and directory masks handed to the directory scanner.
//!
//! Two regexes drive a scan:
//! - the file mask, an end-anchored alternation of accepted extensions
//! - the no-mask, a whole-segment alternation of directory names to prune
//!
//! Every entry is passed through `regex::escape` before it is composed, so
//! configured values never contribute regex syntax.

use regex::Regex;

use crate::config::SettingsSource;
use crate::error::Result;

/// Directory name excluded from every scan, whatever the configuration says.
pub const ALWAYS_IGNORED_DIRECTORY: &str = "tests";

/// Build the extension pattern: `(?:ext1|ext2)$`.
///
/// Returns `None` for an empty extension list. An empty alternation would
/// match every filename, so callers treat `None` as "match nothing".
pub fn extension_pattern<S: AsRef<str>>(extensions: &[S]) -> Option<String> {
    if extensions.is_empty() {
        return None;
    }
    Some(format!("(?:{})$", escape_join(extensions.iter())))
}

/// Build the no-mask pattern: `^(?:dir1|dir2|tests)$`.
///
/// `tests` is appended after the configured names even if it is already
/// present.
pub fn no_mask_pattern<S: AsRef<str>>(configured: &[S]) -> String {
    let names = configured
        .iter()
        .map(|s| s.as_ref())
        .chain(std::iter::once(ALWAYS_IGNORED_DIRECTORY));
    format!("^(?:{})$", escape_join(names))
}

fn escape_join<I, S>(items: I) -> String
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    items
        .map(|item| regex::escape(item.as_ref()))
        .collect::<Vec<_>>()
        .join("|")
}

/// Compiled filename mask.
#[derive(Debug, Clone)]
pub struct FileMask {
    regex: Option<Regex>,
}

impl FileMask {
    /// Compile a mask from a list of accepted extensions.
    pub fn from_extensions<S: AsRef<str>>(extensions: &[S]) -> Result<Self> {
        let regex = extension_pattern(extensions)
            .map(|pattern| Regex::new(&pattern))
            .transpose()?;
        Ok(Self { regex })
    }

    /// Test a file basename against the mask.
    pub fn is_match(&self, file_name: &str) -> bool {
        self.regex.as_ref().is_some_and(|r| r.is_match(file_name))
    }

    /// Regex source, or `None` when the mask matches nothing.
    pub fn as_str(&self) -> Option<&str> {
        self.regex.as_ref().map(Regex::as_str)
    }
}

/// Compiled exclusion mask for path segments.
#[derive(Debug, Clone)]
pub struct NoMask {
    regex: Regex,
}

impl NoMask {
    /// Compile a no-mask from an explicit list of directory names.
    pub fn new<S: AsRef<str>>(configured: &[S]) -> Result<Self> {
        let regex = Regex::new(&no_mask_pattern(configured))?;
        Ok(Self { regex })
    }

    /// Read the ignore list from `settings` and compile it.
    pub fn from_settings(settings: &dyn SettingsSource) -> Result<Self> {
        let ignore = settings.file_scan_ignore_directories();
        tracing::debug!("file scan ignore directories: {:?}", ignore);
        Self::new(&ignore)
    }

    /// Test a single path segment (a basename, not a full path).
    pub fn is_match(&self, segment: &str) -> bool {
        self.regex.is_match(segment)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

#[cfg(test)]
#[path = "mask_tests.rs"]
mod tests;
