//! Error types for the terminal core.
//!
//! Every error here is surfaced locally as an error line in the session
//! history; none of them propagate to the presentation adapter or
//! terminate the session.

use thiserror::Error;

/// Failures produced while executing a command.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    /// The command name matched no registered handler.
    #[error("command not found: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),

    /// Path resolution failed at some segment.
    #[error("{command}: {path}: No such file or directory")]
    PathNotFound { command: String, path: String },

    /// The resolved node is a file where a directory was required.
    #[error("{command}: {path}: Not a directory")]
    NotADirectory { command: String, path: String },

    /// The resolved node is a directory where a file was required.
    #[error("{command}: {path}: Is a directory")]
    NotAFile { command: String, path: String },

    /// The command requires an argument that was not given.
    #[error("{command}: missing operand")]
    MissingOperand { command: String },
}

impl ShellError {
    pub fn path_not_found(command: &str, path: impl Into<String>) -> Self {
        Self::PathNotFound {
            command: command.to_string(),
            path: path.into(),
        }
    }

    pub fn not_a_directory(command: &str, path: impl Into<String>) -> Self {
        Self::NotADirectory {
            command: command.to_string(),
            path: path.into(),
        }
    }

    pub fn not_a_file(command: &str, path: impl Into<String>) -> Self {
        Self::NotAFile {
            command: command.to_string(),
            path: path.into(),
        }
    }

    pub fn missing_operand(command: &str) -> Self {
        Self::MissingOperand {
            command: command.to_string(),
        }
    }
}

/// Environment variable store errors.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EnvironmentError {
    #[error("invalid variable name (use letters, numbers, underscores)")]
    InvalidVariableName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ShellError::UnknownCommand("bogus-cmd".into()).to_string(),
            "command not found: bogus-cmd. Type 'help' for available commands."
        );
        assert_eq!(
            ShellError::path_not_found("cd", "~/missing").to_string(),
            "cd: ~/missing: No such file or directory"
        );
        assert_eq!(
            ShellError::not_a_directory("ls", "~/README.md").to_string(),
            "ls: ~/README.md: Not a directory"
        );
        assert_eq!(
            ShellError::not_a_file("cat", "~/tools").to_string(),
            "cat: ~/tools: Is a directory"
        );
        assert_eq!(
            ShellError::missing_operand("cat").to_string(),
            "cat: missing operand"
        );
    }
}
