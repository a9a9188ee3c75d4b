//! Filesystem data model and manifest types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A node in the virtual filesystem.
///
/// The tree is built once at session start and never mutated afterwards.
#[derive(Clone, Debug)]
pub enum FsEntry {
    Directory {
        /// Child nodes keyed by name. Names are unique within a directory.
        children: HashMap<String, FsEntry>,
    },
    File {
        /// Literal text content.
        content: String,
    },
}

impl FsEntry {
    /// Create an empty directory.
    pub fn dir() -> Self {
        FsEntry::Directory {
            children: HashMap::new(),
        }
    }

    /// Create a file with the given content.
    pub fn file(content: impl Into<String>) -> Self {
        FsEntry::File {
            content: content.into(),
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, FsEntry::Directory { .. })
    }

    /// Children of a directory, `None` for files.
    pub fn children(&self) -> Option<&HashMap<String, FsEntry>> {
        match self {
            FsEntry::Directory { children } => Some(children),
            FsEntry::File { .. } => None,
        }
    }

    /// Content of a file, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match self {
            FsEntry::File { content } => Some(content),
            FsEntry::Directory { .. } => None,
        }
    }
}

// =============================================================================
// Manifest Types
// =============================================================================

/// Declarative description of the filesystem, loaded at session start.
///
/// Paths are relative to the root (`notes/todo.md`), no leading slashes.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Manifest {
    /// File entries; parent directories are created implicitly.
    pub files: Vec<FileEntry>,
    /// Directories that should exist even when empty.
    #[serde(default)]
    pub directories: Vec<DirectoryEntry>,
}

/// File entry from the manifest.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FileEntry {
    /// Path relative to the root (e.g., `notes/todo.md`).
    pub path: String,
    /// Literal file content.
    pub content: String,
}

/// Directory entry from the manifest.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DirectoryEntry {
    /// Path relative to the root (e.g., `notes`).
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kinds() {
        let file = FsEntry::file("hello");
        assert!(!file.is_directory());
        assert_eq!(file.content(), Some("hello"));
        assert!(file.children().is_none());

        let dir = FsEntry::dir();
        assert!(dir.is_directory());
        assert!(dir.content().is_none());
        assert_eq!(dir.children().map(|c| c.len()), Some(0));
    }

    #[test]
    fn test_manifest_deserialize() {
        let json = r#"{
            "files": [{"path": "README.md", "content": "hello"}],
            "directories": [{"path": "tools"}]
        }"#;
        let manifest: Manifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.files.len(), 1);
        assert_eq!(manifest.files[0].path, "README.md");
        assert_eq!(manifest.directories.len(), 1);
    }

    #[test]
    fn test_manifest_directories_optional() {
        let json = r#"{"files": []}"#;
        let manifest: Manifest = serde_json::from_str(json).unwrap();
        assert!(manifest.directories.is_empty());
    }
}
