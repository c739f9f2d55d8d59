//! Command-line interface definitions for filedex.
//!
//! This module contains the CLI argument parsing structure using clap's
//! derive macros. The definitions are shared between the main binary and
//! build tools (like xtask) for man page generation.
//!
//! Note: Field-level documentation doubles as clap help text, so we allow
//! missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Command-line arguments.
///
/// Running with no arguments scans the directory containing the executable
/// and writes `files.json` next to it, which is the normal deployment mode
/// on the web server. The flags exist for testing and for one-off scans of
/// other trees.
#[derive(Parser, Debug)]
#[command(
    name = "filedex",
    version = crate::VERSION,
    about = "Generate the files.json manifest for a static download page",
    long_about = "Scans the site root one folder level deep, skips development \
artifacts, and writes a files.json manifest listing every folder and the \
downloadable files inside it."
)]
pub struct Cli {
    /// Site root to scan (defaults to the directory containing the executable)
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Where to write the manifest (defaults to <root>/files.json)
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Suppress the scan summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Log every skipped entry to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,
}
