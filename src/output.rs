//! Console output and verbosity control.
//!
//! The scan summary goes to stdout and keeps the exact line format the
//! tool has always printed, so it stays grep-friendly when piped. Color
//! is applied to the label words only and drops out automatically when
//! stdout is not a terminal.

use crate::manifest::Manifest;
use colored::Colorize;
use std::fmt::Write as _;
use std::path::Path;
use std::sync::atomic::{AtomicU8, Ordering};

/// Global output level, defaults to [`Verbosity::Normal`].
static VERBOSITY: AtomicU8 = AtomicU8::new(Verbosity::Normal as u8);

/// How much the tool prints to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Verbosity {
    /// No summary output, errors only.
    Quiet = 0,
    /// The standard scan summary.
    Normal = 1,
    /// Summary plus per-entry trace logging.
    Verbose = 2,
}

/// Set the global output level.
pub fn set_verbosity(level: Verbosity) {
    VERBOSITY.store(level as u8, Ordering::Relaxed);
}

/// Current output level as a raw value.
#[must_use]
pub fn verbosity() -> u8 {
    VERBOSITY.load(Ordering::Relaxed)
}

/// Whether summary output is suppressed.
#[must_use]
pub fn is_quiet() -> bool {
    verbosity() == Verbosity::Quiet as u8
}

/// Print the scan banner before the walk starts.
pub fn print_scan_start(root: &Path) {
    if is_quiet() {
        return;
    }
    println!("{} {}", "Scanning:".cyan().bold(), root.display());
}

/// Print the post-scan summary: output path, counts, and the listing.
pub fn print_summary(manifest: &Manifest, output_path: &Path) {
    if is_quiet() {
        return;
    }
    println!("{} {}", "Generated:".green().bold(), output_path.display());
    println!(
        "{} {} folders, {} files",
        "Found:".bold(),
        manifest.folder_count(),
        manifest.file_count()
    );
    print!("{}", folder_listing(manifest));
}

/// Render the indented folder/file listing that follows the counts line.
fn folder_listing(manifest: &Manifest) -> String {
    let mut out = String::new();
    for folder in &manifest.folders {
        let _ = writeln!(out, "  /{}/", folder.name);
        for file in &folder.files {
            let _ = writeln!(out, "    - {}", file.name);
        }
    }
    out
}
