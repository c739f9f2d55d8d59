//! Manifest types serialized to `files.json`.
//!
//! The manifest is the contract with the static download page: a generation
//! timestamp plus the ordered folder/file listing. It is rebuilt from
//! scratch on every run and fully overwrites the previous file. There is no
//! merging and no incremental update.

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::path::Path;

/// File name for the generated manifest.
pub const MANIFEST_FILE: &str = "files.json";

/// A single downloadable file: base name only, no size or metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Base name of the file inside its folder.
    pub name: String,
}

/// A folder and the qualifying files directly inside it.
///
/// Folders with zero qualifying files are never materialized; the scanner
/// drops them before they reach the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderEntry {
    /// Base name of the folder under the scan root.
    pub name: String,
    /// Files in directory-listing order.
    pub files: Vec<FileEntry>,
}

/// The generated `files.json` document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// UTC generation timestamp, captured when the scan starts.
    #[serde(serialize_with = "rfc3339_micros")]
    pub generated: DateTime<Utc>,
    /// Non-empty folders in directory-listing order.
    pub folders: Vec<FolderEntry>,
}

/// Serialize the timestamp as RFC 3339 with microsecond precision and an
/// explicit `+00:00` offset, the exact format the download page has always
/// consumed.
fn rfc3339_micros<S: Serializer>(stamp: &DateTime<Utc>, ser: S) -> Result<S::Ok, S::Error> {
    ser.serialize_str(&stamp.to_rfc3339_opts(SecondsFormat::Micros, false))
}

impl Manifest {
    /// Number of folders in the manifest.
    #[must_use]
    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    /// Total number of files across all folders.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.folders.iter().map(|folder| folder.files.len()).sum()
    }

    /// Serialize to 2-space-indented JSON (UTF-8, no ASCII escaping).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize manifest")
    }

    /// Write the manifest to `path`, fully overwriting previous content.
    ///
    /// The write happens once, after the entire scan has completed in
    /// memory. Either the complete manifest lands on disk or the error
    /// propagates; there is no partial-output mode.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write manifest to {}", path.display()))?;
        Ok(())
    }

    /// Load a manifest from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest from {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse manifest at {}", path.display()))
    }
}
