//! Terminal history entry types.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Text styling for `ls` listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    /// Directory entries
    Directory,
    /// Regular file entries
    File,
    /// Dot-files (dimmed)
    Hidden,
}

/// A single line in the session history, with a unique ID.
///
/// IDs are process-global and monotonic so a presentation adapter can key
/// lines efficiently and detect new entries across a `clear`.
#[derive(Clone, Debug)]
pub struct OutputLine {
    pub id: usize,
    pub data: OutputLineData,
}

/// The content of a history line.
///
/// `Command` is the echo of a submitted line; every other variant is
/// command output.
#[derive(Clone, Debug, PartialEq)]
pub enum OutputLineData {
    /// Echo of a submitted command, with the working path it ran in.
    Command { path: String, input: String },
    /// Plain text output
    Text(String),
    /// Error message
    Error(String),
    /// Informational message
    Info(String),
    /// Success message
    Success(String),
    /// ASCII art banner
    Ascii(String),
    /// Empty spacer line
    Empty,
    /// One entry of an `ls` listing
    ListEntry { name: String, style: TextStyle },
}

static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Info(s.into()))
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Success(s.into()))
    }

    pub fn ascii(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Ascii(s.into()))
    }

    pub fn command(path: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            path: path.into(),
            input: input.into(),
        })
    }

    /// Create a listing entry; dot-files render dimmed, directories bold.
    pub fn list_entry(name: impl Into<String>, is_dir: bool) -> Self {
        let name = name.into();
        let style = if is_dir {
            TextStyle::Directory
        } else if name.starts_with('.') {
            TextStyle::Hidden
        } else {
            TextStyle::File
        };
        Self::new(OutputLineData::ListEntry { name, style })
    }

    pub fn empty() -> Self {
        Self::new(OutputLineData::Empty)
    }

    /// True for command echo lines.
    pub fn is_command_echo(&self) -> bool {
        matches!(self.data, OutputLineData::Command { .. })
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // Content equality only; IDs always differ.
        self.data == other.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            OutputLine::text("hello").data,
            OutputLineData::Text("hello".to_string())
        );
        assert_eq!(
            OutputLine::error("bad").data,
            OutputLineData::Error("bad".to_string())
        );
        assert_eq!(OutputLine::empty().data, OutputLineData::Empty);
    }

    #[test]
    fn test_command_echo() {
        let line = OutputLine::command("~/notes", "ls -l");
        assert!(line.is_command_echo());
        match line.data {
            OutputLineData::Command { path, input } => {
                assert_eq!(path, "~/notes");
                assert_eq!(input, "ls -l");
            }
            _ => panic!("expected Command variant"),
        }
    }

    #[test]
    fn test_list_entry_styles() {
        let dir = OutputLine::list_entry("docs", true);
        assert!(matches!(
            dir.data,
            OutputLineData::ListEntry {
                style: TextStyle::Directory,
                ..
            }
        ));

        let hidden = OutputLine::list_entry(".profile", false);
        assert!(matches!(
            hidden.data,
            OutputLineData::ListEntry {
                style: TextStyle::Hidden,
                ..
            }
        ));

        let file = OutputLine::list_entry("todo.md", false);
        assert!(matches!(
            file.data,
            OutputLineData::ListEntry {
                style: TextStyle::File,
                ..
            }
        ));
    }

    #[test]
    fn test_unique_monotonic_ids() {
        let a = OutputLine::text("x");
        let b = OutputLine::text("x");
        assert!(b.id > a.id);
        assert_eq!(a, b); // content equality ignores IDs
    }
}
