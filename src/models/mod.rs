//! Data models for the terminal core.
//!
//! Contains domain types for:
//! - [`FsEntry`], [`Manifest`] - virtual filesystem representation
//! - [`VirtualPath`] - `~`-anchored path handling
//! - [`OutputLine`] - session history entries

mod filesystem;
mod path;
mod terminal;

pub use filesystem::{DirectoryEntry, FileEntry, FsEntry, Manifest};
pub use path::VirtualPath;
pub use terminal::{OutputLine, OutputLineData, TextStyle};
