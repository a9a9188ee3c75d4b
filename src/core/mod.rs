//! Core logic of the terminal emulator.
//!
//! This module provides:
//! - [`Command`] parsing and [`execute_pipeline`] execution
//! - [`VirtualFs`] virtual filesystem management and path resolution
//! - [`EnvStore`] session environment variables
//! - [`autocomplete`] and [`get_hint`] for tab completion

mod autocomplete;
mod commands;
pub mod env;
pub mod error;
mod filesystem;
pub mod parser;

pub use autocomplete::{AutocompleteResult, autocomplete, get_hint};
pub use commands::{Command, CommandResult, PathArg, banner_lines, execute_command, execute_pipeline};
pub use env::EnvStore;
pub use filesystem::{DirEntry, VirtualFs};
pub use parser::parse_input;
