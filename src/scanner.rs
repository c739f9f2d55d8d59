//! One-level directory scanning.
//!
//! The scanner walks the immediate children of the site root, descends
//! exactly one level into each qualifying folder, and assembles a
//! [`Manifest`] from what it finds. Traversal never recurses further:
//! sub-folders inside a folder are neither listed nor descended into.

use crate::config::ScanConfig;
use crate::manifest::{FileEntry, FolderEntry, Manifest};
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Scans a site root and produces the manifest for `files.json`.
pub struct DirectoryScanner {
    /// Root directory whose immediate children are candidate folders.
    root: PathBuf,
    /// Ignore set and extension filter applied during the walk.
    config: ScanConfig,
}

/// Immediate children of `dir`, sorted byte-wise by file name.
///
/// `min_depth(1)` skips `dir` itself and `max_depth(1)` stops the walk from
/// descending, so the iterator yields exactly one directory level.
fn sorted_children(dir: &Path) -> walkdir::IntoIter {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
}

impl DirectoryScanner {
    /// Create a scanner for `root` with the given configuration.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, config: ScanConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Root directory this scanner reads from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scan the root and build the manifest.
    ///
    /// The generation timestamp is captured before the walk starts, so it
    /// marks the beginning of the scan. Folders are visited in byte-wise
    /// name order and folders that end up with zero qualifying files are
    /// dropped from the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the root or any candidate folder cannot be
    /// listed, for example when the root does not exist or a folder is not
    /// readable.
    pub fn scan_directory(&self) -> Result<Manifest> {
        let generated = Utc::now();
        let mut folders = Vec::new();

        for entry in sorted_children(&self.root) {
            let entry = entry
                .with_context(|| format!("Failed to list directory {}", self.root.display()))?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if self.config.is_ignored(&name) {
                debug!(name = %name, "Skipping ignored entry");
                continue;
            }
            // Symlinks resolve here, so a link to a directory counts.
            if !entry.path().is_dir() {
                continue;
            }

            let files = self.scan_folder(entry.path())?;
            if files.is_empty() {
                debug!(name = %name, "Dropping empty folder");
                continue;
            }
            folders.push(FolderEntry { name, files });
        }

        Ok(Manifest { generated, folders })
    }

    /// Collect the qualifying files directly inside `dir`.
    fn scan_folder(&self, dir: &Path) -> Result<Vec<FileEntry>> {
        let mut files = Vec::new();

        for entry in sorted_children(dir) {
            let entry =
                entry.with_context(|| format!("Failed to list folder {}", dir.display()))?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if self.config.is_ignored(&name) {
                debug!(file = %name, "Skipping ignored file");
                continue;
            }
            if !entry.path().is_file() {
                continue;
            }
            if !self.config.matches_extension(entry.path()) {
                debug!(file = %name, "Skipping file outside extension filter");
                continue;
            }
            files.push(FileEntry { name });
        }

        Ok(files)
    }
}
