//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A disposable site root populated with folders and files.
///
/// The path is canonicalized once at creation so assertions line up with
/// the resolved paths the binary prints.
pub struct SiteRoot {
    dir: TempDir,
    root: PathBuf,
}

impl SiteRoot {
    /// Create an empty site root.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp site root");
        let root = dir.path().canonicalize().expect("canonicalize site root");
        Self { dir, root }
    }

    /// Canonical path of the site root.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Create a folder directly under the root.
    pub fn add_folder(&self, name: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::create_dir_all(&path).expect("create folder");
        path
    }

    /// Create a file inside a folder, creating the folder if needed.
    pub fn add_file(&self, folder: &str, name: &str) {
        let dir = self.add_folder(folder);
        fs::write(dir.join(name), b"content").expect("write file");
    }

    /// Create a file directly under the root.
    pub fn add_root_file(&self, name: &str) {
        fs::write(self.root.join(name), b"content").expect("write root file");
    }

    /// Path where the binary writes the manifest by default.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join("files.json")
    }

    /// Parse the written manifest as JSON.
    pub fn read_manifest(&self) -> serde_json::Value {
        let data = fs::read_to_string(self.manifest_path()).expect("read manifest");
        serde_json::from_str(&data).expect("parse manifest")
    }
}
