//! demosh - an embeddable in-memory terminal emulator core.
//!
//! The crate owns command parsing, dispatch, a virtual filesystem, session
//! history, and command recall. A presentation adapter (the bundled REPL
//! binary, a web component, a TUI) feeds raw input lines into a
//! [`Session`] and renders its history after each call.
//!
//! ```
//! use demosh::{Manifest, Session, VirtualFs};
//!
//! let manifest: Manifest = serde_json::from_str(
//!     r#"{"files": [{"path": "README.md", "content": "hello"}]}"#,
//! ).unwrap();
//! let mut session = Session::bare(VirtualFs::from_manifest(&manifest));
//!
//! session.submit_line("cat README.md");
//! assert_eq!(session.history_len(), 2); // command echo + file content
//! ```

pub mod config;
mod core;
mod models;
mod session;
mod utils;

pub use crate::core::error::{EnvironmentError, ShellError};
pub use crate::core::parser::{ParseError, Pipeline};
pub use crate::core::{
    AutocompleteResult, Command, CommandResult, DirEntry, EnvStore, PathArg, VirtualFs,
    banner_lines, parse_input,
};
pub use crate::models::{
    DirectoryEntry, FileEntry, FsEntry, Manifest, OutputLine, OutputLineData, TextStyle,
    VirtualPath,
};
pub use crate::session::{RecallBuffer, Session};
pub use crate::utils::RingBuffer;

use tracing::warn;

/// Build the built-in demo filesystem from the embedded manifest.
///
/// Falls back to an empty filesystem if the embedded manifest fails to
/// parse, keeping the session usable.
pub fn demo_fs() -> VirtualFs {
    match serde_json::from_str::<Manifest>(config::DEMO_MANIFEST) {
        Ok(manifest) => VirtualFs::from_manifest(&manifest),
        Err(e) => {
            warn!(error = %e, "embedded demo manifest failed to parse");
            VirtualFs::empty()
        }
    }
}
