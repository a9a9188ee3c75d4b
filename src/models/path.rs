//! Virtual path type for `~`-anchored navigation.

use std::fmt;

/// A path relative to the filesystem root.
///
/// Stored without leading or trailing slashes:
/// - Root (`~`): empty string
/// - Subdirectory: `"notes"`, `"notes/drafts"`
/// - File: `"notes/todo.md"`
///
/// The display form is `~`-anchored (`~`, `~/notes`). A `VirtualPath` says
/// nothing about whether the path exists; the filesystem is the authority
/// on that.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VirtualPath(String);

impl VirtualPath {
    /// The filesystem root, displayed as `~`.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Build from an already-relative path (`"notes/drafts"`).
    pub fn from_relative(rel: impl Into<String>) -> Self {
        Self(rel.into())
    }

    /// The relative form used for filesystem lookups (empty string = root).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path segments, oldest ancestor first. Empty for the root.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Textually join a relative suffix under this path.
    ///
    /// No normalization or validation happens here; the result is a
    /// candidate for resolution against the filesystem.
    pub fn join(&self, rel: &str) -> String {
        let rel = rel.trim_matches('/');
        if self.0.is_empty() {
            rel.to_string()
        } else if rel.is_empty() {
            self.0.clone()
        } else {
            format!("{}/{}", self.0, rel)
        }
    }

    /// `~`-anchored display form shown in prompts and command echoes.
    pub fn display(&self) -> String {
        if self.0.is_empty() {
            "~".to_string()
        } else {
            format!("~/{}", self.0)
        }
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_display() {
        assert_eq!(VirtualPath::root().display(), "~");
        assert!(VirtualPath::root().is_root());
    }

    #[test]
    fn test_nested_display() {
        let path = VirtualPath::from_relative("notes/drafts");
        assert_eq!(path.display(), "~/notes/drafts");
        assert_eq!(path.as_str(), "notes/drafts");
        assert!(!path.is_root());
    }

    #[test]
    fn test_join() {
        let root = VirtualPath::root();
        assert_eq!(root.join("notes"), "notes");

        let notes = VirtualPath::from_relative("notes");
        assert_eq!(notes.join("todo.md"), "notes/todo.md");
        assert_eq!(notes.join(""), "notes");
        assert_eq!(notes.join("/drafts/"), "notes/drafts");
    }

    #[test]
    fn test_segments() {
        let path = VirtualPath::from_relative("a/b/c");
        let segs: Vec<_> = path.segments().collect();
        assert_eq!(segs, vec!["a", "b", "c"]);
        assert_eq!(VirtualPath::root().segments().count(), 0);
    }
}
