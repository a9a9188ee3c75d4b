//! Virtual filesystem construction, lookup, and path resolution.

use std::collections::HashMap;

use tracing::warn;

use crate::models::{FsEntry, Manifest, VirtualPath};

/// Directory entry returned by [`VirtualFs::list_dir`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Immutable in-memory filesystem rooted at `~`.
///
/// Built once at session start from a [`Manifest`]; never mutated
/// afterwards.
///
/// # Path Convention
///
/// Lookups use relative paths from the root:
/// - Root: empty string `""`
/// - File in root: `"README.md"`
/// - Nested file: `"notes/todo.md"`
/// - No leading or trailing slashes
#[derive(Clone)]
pub struct VirtualFs {
    root: FsEntry,
}

impl VirtualFs {
    /// Build the filesystem from a manifest.
    ///
    /// Parent directories of each file are created implicitly. A manifest
    /// entry whose path walks through an existing file is skipped with a
    /// warning; it never replaces the file.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut tree: HashMap<String, FsEntry> = HashMap::new();

        for file in &manifest.files {
            Self::insert_file(&mut tree, &file.path, &file.content);
        }

        for dir in &manifest.directories {
            if !dir.path.is_empty() {
                Self::ensure_directory(&mut tree, &dir.path);
            }
        }

        Self {
            root: FsEntry::Directory { children: tree },
        }
    }

    /// Create an empty filesystem (fallback when no manifest is available).
    pub fn empty() -> Self {
        Self {
            root: FsEntry::dir(),
        }
    }

    /// Insert a file at `path`, creating parent directories as needed.
    fn insert_file(tree: &mut HashMap<String, FsEntry>, path: &str, content: &str) {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let Some((leaf, ancestors)) = parts.split_last() else {
            warn!(path, "manifest file entry with empty path skipped");
            return;
        };

        let mut current = tree;
        for part in ancestors {
            let entry = current.entry(part.to_string()).or_insert_with(FsEntry::dir);
            current = match entry {
                FsEntry::Directory { children } => children,
                FsEntry::File { .. } => {
                    // A file sits where a directory is expected.
                    warn!(path, blocked_by = part, "manifest conflict, entry skipped");
                    return;
                }
            };
        }
        current.insert(leaf.to_string(), FsEntry::file(content));
    }

    /// Ensure a directory exists at `path`, creating ancestors as needed.
    fn ensure_directory(tree: &mut HashMap<String, FsEntry>, path: &str) {
        let mut current = tree;
        for part in path.split('/').filter(|s| !s.is_empty()) {
            let entry = current.entry(part.to_string()).or_insert_with(FsEntry::dir);
            current = match entry {
                FsEntry::Directory { children } => children,
                FsEntry::File { .. } => {
                    warn!(path, blocked_by = part, "manifest conflict, entry skipped");
                    return;
                }
            };
        }
    }

    /// Resolve a path argument against the current working path.
    ///
    /// - `~` names the root; `~/rest` is anchored at the root.
    /// - Anything else is joined under `current`.
    /// - Segment matching is case-sensitive and exact; the first segment
    ///   with no matching child fails the whole resolution.
    /// - `.` and `..` are not interpreted: traversal is strictly downward,
    ///   so they behave as ordinary (never-matching) names. Known
    ///   limitation of this filesystem.
    ///
    /// Returns the canonical relative path if the target exists.
    pub fn resolve_path(&self, current: &VirtualPath, path: &str) -> Option<VirtualPath> {
        let candidate = Self::candidate_path(current, path);
        if self.get_entry(&candidate).is_some() {
            Some(VirtualPath::from_relative(candidate))
        } else {
            None
        }
    }

    /// Turn a path argument into a candidate relative path, without
    /// checking existence.
    fn candidate_path(current: &VirtualPath, path: &str) -> String {
        let rel = if path == "~" {
            return String::new();
        } else if let Some(rest) = path.strip_prefix("~/") {
            rest.to_string()
        } else {
            current.join(path)
        };

        // Collapse duplicate and trailing slashes.
        rel.split('/')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Look up an entry by relative path. Empty string returns the root.
    pub fn get_entry(&self, path: &str) -> Option<&FsEntry> {
        let mut current = &self.root;
        for part in path.split('/').filter(|s| !s.is_empty()) {
            current = current.children()?.get(part)?;
        }
        Some(current)
    }

    /// Read a file's content by relative path.
    pub fn read_file(&self, path: &str) -> Option<&str> {
        self.get_entry(path)?.content()
    }

    /// Check if a relative path names a directory.
    pub fn is_directory(&self, path: &str) -> bool {
        matches!(self.get_entry(path), Some(FsEntry::Directory { .. }))
    }

    /// List directory contents, or `None` for files and missing paths.
    ///
    /// Entries are sorted: directories first, then regular files, hidden
    /// names last within each group, alphabetical within each category.
    /// This makes listings deterministic regardless of manifest order.
    pub fn list_dir(&self, path: &str) -> Option<Vec<DirEntry>> {
        let children = self.get_entry(path)?.children()?;
        let mut entries: Vec<DirEntry> = children
            .iter()
            .map(|(name, entry)| DirEntry {
                name: name.clone(),
                is_dir: entry.is_directory(),
            })
            .collect();

        entries.sort_by(|a, b| {
            let a_hidden = a.name.starts_with('.');
            let b_hidden = b.name.starts_with('.');
            match (a.is_dir, b.is_dir, a_hidden, b_hidden) {
                (true, false, _, _) => std::cmp::Ordering::Less,
                (false, true, _, _) => std::cmp::Ordering::Greater,
                (_, _, false, true) => std::cmp::Ordering::Less,
                (_, _, true, false) => std::cmp::Ordering::Greater,
                _ => a.name.cmp(&b.name),
            }
        });
        Some(entries)
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::empty()
    }
}
