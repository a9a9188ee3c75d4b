//! Terminal session: history, recall buffer, working path, dispatch.
//!
//! A [`Session`] owns every piece of mutable state the terminal core has.
//! Presentation adapters drive it through two entry points -
//! [`Session::submit_line`] for submitted input and
//! [`Session::recall_previous`]/[`Session::recall_next`] for up/down
//! navigation - and render the observable history after each call.
//! Everything is synchronous; each call runs to completion before the next
//! event is handled.

use tracing::debug;

use crate::config::{APP_NAME, MAX_COMMAND_RECALL, MAX_TERMINAL_HISTORY, USER_NAME};
use crate::core::{
    AutocompleteResult, EnvStore, VirtualFs, autocomplete, banner_lines, execute_pipeline,
    get_hint, parse_input,
};
use crate::models::{OutputLine, VirtualPath};
use crate::utils::RingBuffer;

// ============================================================================
// RecallBuffer
// ============================================================================

/// Previously submitted raw command lines, navigated with up/down.
///
/// Distinct from the session history: it holds only what the user typed,
/// and `clear` does not touch it. Consecutive duplicates are kept so that
/// recall steps match submissions one for one.
#[derive(Clone, Debug)]
pub struct RecallBuffer {
    entries: Vec<String>,
    /// `None` means "past the end": a fresh input line.
    cursor: Option<usize>,
    capacity: usize,
}

impl RecallBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            capacity,
        }
    }

    /// The stored lines, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Append a submitted line and reset the cursor past the end.
    ///
    /// The oldest entry is dropped once the buffer is at capacity.
    pub fn push(&mut self, line: &str) {
        self.entries.push(line.to_string());
        if self.entries.len() > self.capacity {
            self.entries.remove(0);
        }
        self.cursor = None;
    }

    /// Step toward the oldest entry, clamping there.
    ///
    /// Returns the entry at the new cursor position; at the oldest entry
    /// it keeps returning that entry. `None` only when the buffer is empty.
    pub fn previous(&mut self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        let index = match self.cursor {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(index);
        Some(self.entries[index].clone())
    }

    /// Step toward "past the end", clamping there.
    ///
    /// Returns the entry at the new position, or an empty string once the
    /// cursor leaves the newest entry (the input line becomes fresh).
    /// `None` when no recall is in progress.
    pub fn next(&mut self) -> Option<String> {
        let i = self.cursor?;
        if i + 1 < self.entries.len() {
            self.cursor = Some(i + 1);
            Some(self.entries[i + 1].clone())
        } else {
            self.cursor = None;
            Some(String::new())
        }
    }
}

// ============================================================================
// Session
// ============================================================================

/// A single terminal session.
///
/// Created when the hosting surface mounts, dropped when it unmounts;
/// nothing persists across sessions.
pub struct Session {
    fs: VirtualFs,
    env: EnvStore,
    history: RingBuffer<OutputLine>,
    recall: RecallBuffer,
    current_path: VirtualPath,
}

impl Session {
    /// Create a session over the given filesystem, with the banner shown.
    pub fn new(fs: VirtualFs) -> Self {
        let mut session = Self::bare(fs);
        session.history.extend(banner_lines());
        session
    }

    /// Create a session with an empty history (no banner).
    pub fn bare(fs: VirtualFs) -> Self {
        Self {
            fs,
            env: EnvStore::with_defaults(),
            history: RingBuffer::new(MAX_TERMINAL_HISTORY),
            recall: RecallBuffer::new(MAX_COMMAND_RECALL),
            current_path: VirtualPath::root(),
        }
    }

    // ------------------------------------------------------------------
    // Observable state
    // ------------------------------------------------------------------

    /// History lines, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &OutputLine> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn current_path(&self) -> &VirtualPath {
        &self.current_path
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn env(&self) -> &EnvStore {
        &self.env
    }

    /// Prompt string: `{user}@{app}:{path}`.
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}", USER_NAME, APP_NAME, self.current_path.display())
    }

    // ------------------------------------------------------------------
    // Input entry points
    // ------------------------------------------------------------------

    /// Submit a raw input line.
    ///
    /// A blank line is ignored entirely: no history entry, no recall entry.
    /// Otherwise the command echo is appended first, then the command runs
    /// and its output lines follow; no other command's entries can
    /// interleave because execution is synchronous. Finally the raw line
    /// joins the recall buffer and the recall cursor resets.
    pub fn submit_line(&mut self, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        debug!(command = line, path = %self.current_path, "dispatch");
        self.history
            .push(OutputLine::command(self.current_path.display(), line));

        let pipeline = parse_input(line, self.recall.entries(), &self.env);
        let result = execute_pipeline(&pipeline, &self.fs, &self.current_path, &mut self.env);

        if result.clear_history {
            self.history.clear();
        }
        self.history.extend(result.output);
        if let Some(path) = result.new_path {
            // execute_cd only navigates to verified directories
            self.current_path = path;
        }

        self.recall.push(line);
    }

    /// Recall the previous (older) submitted line, for ArrowUp.
    pub fn recall_previous(&mut self) -> Option<String> {
        self.recall.previous()
    }

    /// Recall the next (newer) submitted line, for ArrowDown.
    pub fn recall_next(&mut self) -> Option<String> {
        self.recall.next()
    }

    /// Tab completion for the current input line.
    pub fn autocomplete(&self, input: &str) -> AutocompleteResult {
        autocomplete(input, &self.current_path, &self.fs)
    }

    /// Ghost text hint for the current input line.
    pub fn hint(&self, input: &str) -> Option<String> {
        get_hint(input, &self.current_path, &self.fs)
    }
}
