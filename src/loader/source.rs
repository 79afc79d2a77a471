// ABOUTME: Tree provider abstraction over template sources
// ABOUTME: Defines the TemplateSource trait plus filesystem and in-memory providers

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Whether a source entry is a directory or a leaf file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One child of a directory node in a template tree.
#[derive(Debug, Clone)]
pub struct SourceEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl SourceEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// A hierarchical view of named nodes rooted at a starting point.
///
/// Paths are `/`-joined and relative to the provider root; the root itself is
/// the empty string. `io::ErrorKind::NotFound` from [`TemplateSource::read`]
/// is the distinguished signal the loader uses to treat a base file as absent.
pub trait TemplateSource {
    /// List the children of a directory node. Order is unspecified.
    fn list(&self, path: &str) -> io::Result<Vec<SourceEntry>>;

    /// Read the contents of a leaf node.
    fn read(&self, path: &str) -> io::Result<String>;
}

/// Filesystem-backed template source rooted at a directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let mut full = self.root.clone();
        if !path.is_empty() {
            // Provider paths are /-joined; rebuild with host separators.
            full.extend(path.split('/'));
        }
        full
    }
}

impl TemplateSource for DirSource {
    fn list(&self, path: &str) -> io::Result<Vec<SourceEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(self.resolve(path))? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            entries.push(SourceEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind: if file_type.is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                },
            });
        }
        Ok(entries)
    }

    fn read(&self, path: &str) -> io::Result<String> {
        fs::read_to_string(self.resolve(path))
    }
}

/// In-memory template source.
///
/// Listing order is deterministic (sorted by name), and [`MemorySource::poison`]
/// forces a read failure for a chosen path, which is how the fail-fast tests
/// simulate an unreadable file.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: BTreeMap<String, String>,
    poisoned: BTreeSet<String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Make every read of `path` fail with `PermissionDenied`.
    pub fn poison(mut self, path: impl Into<String>) -> Self {
        self.poisoned.insert(path.into());
        self
    }
}

impl TemplateSource for MemorySource {
    fn list(&self, path: &str) -> io::Result<Vec<SourceEntry>> {
        let prefix = if path.is_empty() {
            String::new()
        } else {
            format!("{path}/")
        };

        let mut seen = BTreeSet::new();
        let mut entries = Vec::new();
        let mut found = path.is_empty();
        for key in self.files.keys() {
            if let Some(rest) = key.strip_prefix(&prefix) {
                found = true;
                let (name, kind) = match rest.split_once('/') {
                    Some((dir, _)) => (dir, EntryKind::Directory),
                    None => (rest, EntryKind::File),
                };
                if seen.insert(name.to_string()) {
                    entries.push(SourceEntry {
                        name: name.to_string(),
                        kind,
                    });
                }
            }
        }

        if !found {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {path}"),
            ));
        }
        Ok(entries)
    }

    fn read(&self, path: &str) -> io::Result<String> {
        if self.poisoned.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("poisoned path: {path}"),
            ));
        }
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such file: {path}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dir_source_lists_and_reads() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("t1.tmpl"), "hello").unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        fs::write(temp_dir.path().join("sub/t2.tmpl"), "world").unwrap();

        let source = DirSource::new(temp_dir.path());
        let mut names: Vec<(String, bool)> = source
            .list("")
            .unwrap()
            .into_iter()
            .map(|e| (e.name.clone(), e.is_dir()))
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec![("sub".to_string(), true), ("t1.tmpl".to_string(), false)]
        );
        assert_eq!(source.read("sub/t2.tmpl").unwrap(), "world");
    }

    #[test]
    fn test_dir_source_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let source = DirSource::new(temp_dir.path());

        let err = source.read("_base.tmpl").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_memory_source_lists_directories_once() {
        let source = MemorySource::new()
            .file("sub/a.tmpl", "a")
            .file("sub/b.tmpl", "b")
            .file("top.tmpl", "top");

        let entries = source.list("").unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["sub", "top.tmpl"]);
        assert!(entries[0].is_dir());
        assert!(!entries[1].is_dir());

        let sub_entries = source.list("sub").unwrap();
        let sub: Vec<&str> = sub_entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(sub, vec!["a.tmpl", "b.tmpl"]);
    }

    #[test]
    fn test_memory_source_missing_reads() {
        let source = MemorySource::new().file("t.tmpl", "x");

        assert_eq!(
            source.read("missing.tmpl").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
        assert_eq!(
            source.list("no-such-dir").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }

    #[test]
    fn test_memory_source_poison() {
        let source = MemorySource::new().file("t.tmpl", "x").poison("t.tmpl");

        let err = source.read("t.tmpl").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }
}
