//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` for command execution results
//! - `execute_pipeline` for executing commands with pipe support
//!
//! # Architecture
//!
//! Commands are parsed from user input into the `Command` enum, then
//! executed via `execute_command`. Pipes are handled by `execute_pipeline`,
//! which applies filter commands (grep, head, tail, wc) to the head
//! command's output.

mod execute;
mod filters;
mod result;

pub use execute::{banner_lines, execute_command};
pub use filters::apply_filter;
pub use result::CommandResult;

use std::fmt;

use crate::core::env::EnvStore;
use crate::core::error::ShellError;
use crate::core::filesystem::VirtualFs;
use crate::core::parser::Pipeline;
use crate::models::{OutputLine, VirtualPath};

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd notes`, `cat todo.md`).
///
/// This newtype distinguishes path arguments from general strings. The path
/// is stored as-is (not validated) since validation happens during
/// execution against the virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for PathArg {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// A parsed terminal command.
///
/// Command-name lookup is case-insensitive; the name is lowercased before
/// matching. Path arguments keep their original case.
#[derive(Clone, Debug)]
pub enum Command {
    /// List directory contents at an optional path (default: working path).
    Ls { path: Option<PathArg> },
    Cd(PathArg),
    Pwd,
    Cat(PathArg),
    Whoami,
    Date,
    Help,
    Clear,
    Welcome,
    /// Echo the already-joined argument text.
    Echo(String),
    Export(Option<String>),
    Unset(String),
    /// A recognized command used with invalid arguments; carries the error.
    Invalid(ShellError),
    Unknown(String),
}

/// Registered commands with one-line descriptions, in help order.
const COMMAND_TABLE: &[(&str, &str)] = &[
    ("help", "Show this help message"),
    ("clear", "Clear the terminal screen"),
    ("ls [path]", "List files and directories"),
    ("cd [path]", "Change the current directory"),
    ("cat <file>", "Display the content of a file"),
    ("pwd", "Print the current directory"),
    ("whoami", "Display the current user"),
    ("date", "Display the current date and time"),
    ("echo <text>", "Echo back the input"),
    ("export [KEY=value]", "Set or list environment variables"),
    ("unset <KEY>", "Remove an environment variable"),
    ("welcome", "Display the welcome banner"),
];

impl Command {
    /// All completable command names, including pipe filters and aliases.
    pub fn names() -> &'static [&'static str] {
        &[
            "cat", "cd", "clear", "cls", "date", "echo", "export", "grep", "head", "help", "ls",
            "pwd", "tail", "unset", "wc", "welcome", "whoami",
        ]
    }

    /// Name/description pairs for the `help` listing.
    pub fn descriptions() -> &'static [(&'static str, &'static str)] {
        COMMAND_TABLE
    }

    /// Parse a command from its name and argument tokens.
    pub fn parse(name: &str, args: &[String]) -> Self {
        match name.to_lowercase().as_str() {
            "ls" => Self::Ls {
                path: args.first().map(PathArg::new),
            },
            "cd" => Self::Cd(
                args.first()
                    .map(PathArg::new)
                    .unwrap_or_else(|| PathArg::new("~")),
            ),
            "pwd" => Self::Pwd,
            "cat" => match args.first() {
                Some(file) => Self::Cat(PathArg::new(file)),
                None => Self::Invalid(ShellError::missing_operand("cat")),
            },
            "whoami" => Self::Whoami,
            "date" => Self::Date,
            "help" | "?" => Self::Help,
            "clear" | "cls" => Self::Clear,
            "welcome" => Self::Welcome,
            "echo" => Self::Echo(args.join(" ")),
            "export" => {
                if args.is_empty() {
                    Self::Export(None)
                } else {
                    Self::Export(Some(args.join(" ")))
                }
            }
            "unset" => match args.first() {
                Some(key) => Self::Unset(key.clone()),
                None => Self::Invalid(ShellError::missing_operand("unset")),
            },
            _ => Self::Unknown(name.to_string()),
        }
    }
}

// =============================================================================
// Pipeline Execution
// =============================================================================

/// Execute a pipeline of commands with pipe filtering.
///
/// A pipeline is a head command followed by optional filter commands
/// separated by `|`, e.g. `ls | grep foo | head -5`. Session effects
/// (navigation, clear) are discarded when piping; only output lines flow
/// through the filters.
pub fn execute_pipeline(
    pipeline: &Pipeline,
    fs: &VirtualFs,
    current_path: &VirtualPath,
    env: &mut EnvStore,
) -> CommandResult {
    if let Some(ref err) = pipeline.error {
        return CommandResult::output(vec![OutputLine::error(err.to_string())]);
    }

    if pipeline.is_empty() {
        return CommandResult::empty();
    }

    let first = &pipeline.commands[0];
    let cmd = Command::parse(&first.name, &first.args);
    let result = execute_command(cmd, fs, current_path, env);

    if pipeline.commands.len() == 1 {
        return result;
    }

    let mut lines = result.output;
    for filter_cmd in pipeline.commands.iter().skip(1) {
        lines = apply_filter(&filter_cmd.name, &filter_cmd.args, lines);
    }

    CommandResult::output(lines)
}

// =============================================================================
// Tests
// =============================================================================
