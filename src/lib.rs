#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # Filedex - Static File-Listing Manifest Generator
//!
//! Filedex scans a site root one folder level deep and writes `files.json`,
//! the manifest a static download page renders: every immediate subfolder
//! with the files directly inside it, stamped with a generation time.
//!
//! ## Behavior
//!
//! - **One level deep**: the root's subfolders and their direct files;
//!   deeper nesting is intentionally never visited
//! - **Fixed ignore set**: VCS state, dependency caches, editor directories,
//!   the site's own static assets and OS artifact files never appear
//! - **No empty folders**: a folder with no qualifying files is dropped from
//!   the manifest entirely
//! - **Deterministic order**: folders and files are listed in name order
//! - **Full overwrite**: the manifest is rebuilt from scratch on every run
//!
//! ## Architecture
//!
//! - [`cli`]: command-line argument definitions
//! - [`config`]: the ignore set and extension filter
//! - [`scanner`]: the one-level directory scan
//! - [`manifest`]: manifest types and `files.json` persistence
//! - [`output`]: summary rendering and verbosity control
//!
//! ## Example Usage
//!
//! ```no_run
//! use filedex::config::ScanConfig;
//! use filedex::manifest::MANIFEST_FILE;
//! use filedex::scanner::DirectoryScanner;
//! use std::path::PathBuf;
//!
//! # fn main() -> anyhow::Result<()> {
//! let root = PathBuf::from("/srv/site");
//! let scanner = DirectoryScanner::new(root.clone(), ScanConfig::default());
//! let manifest = scanner.scan_directory()?;
//! manifest.save(&root.join(MANIFEST_FILE))?;
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Scan configuration: the ignore set and the extension filter.
pub mod config;

/// Manifest types and `files.json` persistence.
pub mod manifest;

/// Summary rendering, verbosity control, and styled messages.
pub mod output;

/// One-level directory scanning.
pub mod scanner;

/// Current version of the filedex binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
