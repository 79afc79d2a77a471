// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides a builder that writes template trees into temporary directories

#![allow(dead_code)]

use std::fs;

use tempfile::TempDir;

/// Builds a template tree on disk for integration tests.
pub struct TestTreeBuilder {
    files: Vec<(String, String)>,
}

impl TestTreeBuilder {
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Add a file at a /-joined path relative to the tree root.
    pub fn file(mut self, path: &str, content: &str) -> Self {
        self.files.push((path.to_string(), content.to_string()));
        self
    }

    /// Add a `_base.tmpl` for the given directory ("" for the root).
    pub fn base(self, dir: &str, content: &str) -> Self {
        let path = if dir.is_empty() {
            "_base.tmpl".to_string()
        } else {
            format!("{dir}/_base.tmpl")
        };
        self.file(&path, content)
    }

    /// Write the tree into a fresh temporary directory.
    pub fn write(&self) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for (path, content) in &self.files {
            let full = temp_dir.path().join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, content).unwrap();
        }
        temp_dir
    }
}
