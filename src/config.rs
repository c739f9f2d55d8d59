//! Scan configuration: the ignore set and the extension filter.
//!
//! Both sets are in-source constants, materialized into a [`ScanConfig`]
//! once at process start and passed down by reference. There is no config
//! file and no runtime mutation: changing either set means editing the
//! constants below and rebuilding.

use std::collections::HashSet;
use std::path::Path;

/// Names excluded from every scan, at every level the scanner visits.
///
/// Covers VCS and editor state, dependency caches, the site's own static
/// assets, the generator binary itself, and OS artifact files.
pub const IGNORED_NAMES: &[&str] = &[
    ".git",
    ".github",
    "__pycache__",
    "node_modules",
    ".vscode",
    ".idea",
    "index.html",
    "styles.css",
    "script.js",
    "files.json",
    "filedex",
    "README.md",
    ".gitignore",
    ".DS_Store",
    "Thumbs.db",
];

/// Extension allow-list for the default scan. Empty admits every file.
pub const ALLOWED_EXTENSIONS: &[&str] = &[];

/// Immutable scan configuration, constructed once at process start.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Literal names excluded from all scans.
    ignore: HashSet<String>,
    /// Lowercase extension allow-list; empty admits everything.
    allowed_extensions: HashSet<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(IGNORED_NAMES, ALLOWED_EXTENSIONS)
    }
}

impl ScanConfig {
    /// Build a config from explicit name and extension lists.
    ///
    /// Extensions are normalized on the way in: a leading dot is stripped
    /// and the rest lowercased, so `".mid"`, `"MID"` and `"mid"` all denote
    /// the same filter entry.
    #[must_use]
    pub fn new(ignored: &[&str], extensions: &[&str]) -> Self {
        Self {
            ignore: ignored.iter().map(ToString::to_string).collect(),
            allowed_extensions: extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    /// Whether a directory entry name is excluded from scanning.
    #[must_use]
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.contains(name)
    }

    /// Whether a file path passes the extension filter.
    ///
    /// An empty filter admits every file. Matching is case-insensitive on
    /// the extension; a file without an extension only passes the empty
    /// filter.
    #[must_use]
    pub fn matches_extension(&self, path: &Path) -> bool {
        if self.allowed_extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.allowed_extensions.contains(&ext.to_lowercase()))
    }
}
