//! Command execution result type.

use crate::models::{OutputLine, VirtualPath};

/// Result of executing a command.
///
/// Commands produce output lines and may request session effects: clearing
/// the history or moving the working path. Effects are applied by the
/// session after the handler returns; handlers never touch session state
/// directly.
#[derive(Clone, Debug, Default)]
pub struct CommandResult {
    /// Output lines to append to the history.
    pub output: Vec<OutputLine>,
    /// New working path (verified to name a directory), e.g. for `cd`.
    pub new_path: Option<VirtualPath>,
    /// Replace the history with an empty sequence before appending output.
    pub clear_history: bool,
}

impl CommandResult {
    /// A result with just output, no session effects.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            ..Self::default()
        }
    }

    /// A result that moves the working path.
    pub fn navigate(path: VirtualPath) -> Self {
        Self {
            new_path: Some(path),
            ..Self::default()
        }
    }

    /// A result that clears the history.
    pub fn clear() -> Self {
        Self {
            clear_history: true,
            ..Self::default()
        }
    }

    /// An empty result (no output, no effects).
    pub fn empty() -> Self {
        Self::default()
    }
}
