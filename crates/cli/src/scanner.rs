// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive directory scanning.
//!
//! [`DirectoryScanner`] is the capability the deriver depends on. [`FsScanner`]
//! implements it over the real filesystem with the `ignore` crate, pruning
//! any entry whose basename whole-matches the no-mask and recording files
//! whose basename matches the file mask.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ignore::WalkBuilder;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::mask::{FileMask, NoMask};

/// How deep a scan may descend below its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanDepth {
    /// No depth cap.
    #[default]
    Unlimited,
    /// At most this many levels below the root (1 = direct children only).
    Limited(usize),
}

impl ScanDepth {
    /// Depth in the form `WalkBuilder::max_depth` takes.
    pub fn as_max_depth(self) -> Option<usize> {
        match self {
            ScanDepth::Unlimited => None,
            ScanDepth::Limited(depth) => Some(depth),
        }
    }

    /// The tighter of two depths.
    pub fn min(self, other: ScanDepth) -> ScanDepth {
        match (self, other) {
            (ScanDepth::Unlimited, d) | (d, ScanDepth::Unlimited) => d,
            (ScanDepth::Limited(a), ScanDepth::Limited(b)) => ScanDepth::Limited(a.min(b)),
        }
    }
}

/// Metadata for one discovered file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    /// Full path of the file.
    pub uri: PathBuf,
    /// Basename, e.g. `button.ui_patterns.yml`.
    pub filename: String,
    /// Basename with its last extension removed, e.g. `button.ui_patterns`.
    pub name: String,
}

impl FileInfo {
    pub fn from_path(path: PathBuf) -> Self {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            uri: path,
            filename,
            name,
        }
    }
}

/// Discovered files keyed by path.
pub type ScanResult = BTreeMap<PathBuf, FileInfo>;

/// Recursive directory scan capability.
pub trait DirectoryScanner {
    /// Scan `root`, returning every file whose basename matches `mask`,
    /// skipping entries whose basename whole-matches `no_mask`.
    ///
    /// Fails when `root` cannot be read.
    fn scan(
        &self,
        root: &Path,
        mask: &FileMask,
        no_mask: &NoMask,
        depth: ScanDepth,
    ) -> Result<ScanResult>;
}

impl<T: DirectoryScanner + ?Sized> DirectoryScanner for &T {
    fn scan(
        &self,
        root: &Path,
        mask: &FileMask,
        no_mask: &NoMask,
        depth: ScanDepth,
    ) -> Result<ScanResult> {
        (**self).scan(root, mask, no_mask, depth)
    }
}

/// Statistics from a scan.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    /// Files matching the mask.
    pub files_found: usize,

    /// Entries skipped by the no-mask (pruned directories count once).
    pub entries_pruned: usize,

    /// Symlink loops detected.
    pub symlink_loops: usize,

    /// Errors encountered below the root.
    pub errors: usize,
}

/// Helper to check if an ignore::Error is a symlink loop error.
fn is_loop_error(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. } => is_loop_error(err),
        ignore::Error::WithDepth { err, .. } => is_loop_error(err),
        ignore::Error::WithLineNumber { err, .. } => is_loop_error(err),
        _ => false,
    }
}

/// Filesystem scanner.
#[derive(Debug, Clone, Default)]
pub struct FsScanner {
    depth_cap: ScanDepth,
}

impl FsScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap every scan at `depth`, whatever the caller requests.
    pub fn with_depth_cap(depth: ScanDepth) -> Self {
        Self { depth_cap: depth }
    }

    /// Scan and also return walk statistics.
    pub fn scan_with_stats(
        &self,
        root: &Path,
        mask: &FileMask,
        no_mask: &NoMask,
        depth: ScanDepth,
    ) -> Result<(ScanResult, ScanStats)> {
        let meta = std::fs::metadata(root).map_err(|e| Error::Io {
            path: root.to_path_buf(),
            source: e,
        })?;
        if !meta.is_dir() {
            return Err(Error::NotADirectory(root.to_path_buf()));
        }
        // The walker reports an unreadable root as an ordinary entry error.
        std::fs::read_dir(root).map_err(|e| Error::Io {
            path: root.to_path_buf(),
            source: e,
        })?;

        let depth = depth.min(self.depth_cap);
        tracing::debug!(
            "scanning {} (mask: {:?}, no-mask: {}, depth: {:?})",
            root.display(),
            mask.as_str(),
            no_mask.as_str(),
            depth
        );

        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(true)
            .parents(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .follow_links(true) // Follow symlinks (ignore crate detects loops)
            .max_depth(depth.as_max_depth());

        // Prune at the walker level so excluded subtrees are never read.
        // The root itself is never offered to the filter.
        let pruned = Arc::new(AtomicUsize::new(0));
        let filter_pruned = Arc::clone(&pruned);
        let filter_mask = no_mask.clone();
        builder.filter_entry(move |entry| {
            let skip = filter_mask.is_match(&entry.file_name().to_string_lossy());
            if skip {
                filter_pruned.fetch_add(1, Ordering::Relaxed);
            }
            !skip
        });

        let mut files = ScanResult::new();
        let mut stats = ScanStats::default();

        for entry in builder.build() {
            match entry {
                Ok(entry) => {
                    let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
                    if !is_file {
                        continue;
                    }
                    if !mask.is_match(&entry.file_name().to_string_lossy()) {
                        continue;
                    }

                    let path = entry.into_path();
                    stats.files_found += 1;
                    files.insert(path.clone(), FileInfo::from_path(path));
                }
                Err(err) => {
                    if is_loop_error(&err) {
                        tracing::warn!("Symlink loop detected: {}", err);
                        stats.symlink_loops += 1;
                    } else {
                        tracing::warn!("Scan error: {}", err);
                        stats.errors += 1;
                    }
                }
            }
        }

        stats.entries_pruned = pruned.load(Ordering::Relaxed);
        tracing::debug!(
            "scan of {} found {} file(s), pruned {} entr(ies), {} error(s), {} symlink loop(s)",
            root.display(),
            stats.files_found,
            stats.entries_pruned,
            stats.errors,
            stats.symlink_loops
        );

        Ok((files, stats))
    }
}

impl DirectoryScanner for FsScanner {
    fn scan(
        &self,
        root: &Path,
        mask: &FileMask,
        no_mask: &NoMask,
        depth: ScanDepth,
    ) -> Result<ScanResult> {
        self.scan_with_stats(root, mask, no_mask, depth)
            .map(|(files, _)| files)
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
