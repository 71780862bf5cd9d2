// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Discovery of YAML pattern definition files.
//!
//! The deriver builds the file mask and no-mask for a scan and forwards the
//! call to its [`DirectoryScanner`]. Results and errors are returned exactly
//! as the scanner produced them.

use std::path::Path;

use crate::config::SettingsSource;
use crate::error::Result;
use crate::mask::{FileMask, NoMask};
use crate::scanner::{DirectoryScanner, ScanDepth, ScanResult};

/// Extensions recognized when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".ui_patterns.yml"];

/// Finds pattern definition files using an injected scanner and settings.
pub struct YamlPatternsDeriver<S, C> {
    scanner: S,
    settings: C,
    extensions: Vec<String>,
}

impl<S: DirectoryScanner, C: SettingsSource> YamlPatternsDeriver<S, C> {
    pub fn new(scanner: S, settings: C) -> Self {
        Self {
            scanner,
            settings,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Replace the accepted file extensions.
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn file_extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    /// The no-mask for the current settings.
    ///
    /// Settings are read on every call.
    pub fn no_mask(&self) -> Result<NoMask> {
        NoMask::from_settings(&self.settings)
    }

    /// Scan `directory` for pattern definition files, without a depth cap.
    pub fn file_scan_directory(&self, directory: &Path) -> Result<ScanResult> {
        let mask = FileMask::from_extensions(&self.extensions)?;
        let no_mask = self.no_mask()?;
        self.scanner
            .scan(directory, &mask, &no_mask, ScanDepth::Unlimited)
    }

    /// Scan several directories in order and merge the results.
    ///
    /// Stops at the first failing directory.
    pub fn file_scan_directories<P: AsRef<Path>>(&self, directories: &[P]) -> Result<ScanResult> {
        let mut merged = ScanResult::new();
        for directory in directories {
            merged.extend(self.file_scan_directory(directory.as_ref())?);
        }
        Ok(merged)
    }
}

#[cfg(test)]
#[path = "deriver_tests.rs"]
mod tests;
