//! Binary entry point for `filedex`.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use filedex::cli::Cli;
use filedex::config::ScanConfig;
use filedex::manifest::MANIFEST_FILE;
use filedex::output::{self, Verbosity};
use filedex::scanner::DirectoryScanner;
use std::path::PathBuf;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "Error:".red().bold());
        process::exit(1);
    }
}

/// Parse arguments, run the scan, and write the manifest.
fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "filedex", &mut std::io::stdout());
        return Ok(());
    }

    init_tracing(cli.verbose);
    if cli.quiet {
        output::set_verbosity(Verbosity::Quiet);
    } else if cli.verbose {
        output::set_verbosity(Verbosity::Verbose);
    }

    let root = match cli.root {
        Some(path) => path
            .canonicalize()
            .with_context(|| format!("Failed to resolve root {}", path.display()))?,
        None => default_root()?,
    };
    let output_path = cli.output.unwrap_or_else(|| root.join(MANIFEST_FILE));

    let scanner = DirectoryScanner::new(root, ScanConfig::default());
    output::print_scan_start(scanner.root());

    let manifest = scanner.scan_directory()?;
    manifest.save(&output_path)?;

    output::print_summary(&manifest, &output_path);
    Ok(())
}

/// Fully resolved directory containing the running executable.
///
/// This mirrors deploying the tool into the site root: wherever the binary
/// lives is the tree it indexes.
fn default_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let exe = exe
        .canonicalize()
        .with_context(|| format!("Failed to resolve executable path {}", exe.display()))?;
    let dir = exe
        .parent()
        .context("Executable has no parent directory")?;
    Ok(dir.to_path_buf())
}

/// Route tracing to stderr so the stdout summary stays machine-readable.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "filedex=debug" } else { "filedex=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
