//! Input line parser with variable expansion, history references, and pipes.
//!
//! Supports:
//! - Variable expansion: `$VAR`, `${VAR}`
//! - History expansion: `!!` (last command), `!n` (nth command), `!-n` (nth from last)
//! - Pipe operator: `cmd1 | cmd2`
//! - Quote handling: `"string with spaces"`, `'literal string'`

mod expand;
mod lexer;

pub use lexer::{Lexer, Token};

use expand::expand_tokens;
use thiserror::Error;

use crate::core::env::EnvStore;

// =============================================================================
// Parse Error
// =============================================================================

/// Pipeline syntax errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    /// Pipe at the beginning of input: `| grep foo`
    #[error("syntax error near token {}: unexpected '|'", .position + 1)]
    UnexpectedPipe { position: usize },
    /// Empty stage between pipes: `ls | | grep`
    #[error("syntax error near token {}: empty pipe stage", .position + 1)]
    EmptyPipeStage { position: usize },
    /// Pipe at the end with no following command: `ls |`
    #[error("syntax error near token {}: unexpected end after '|'", .position + 1)]
    TrailingPipe { position: usize },
}

// =============================================================================
// Pipeline Representation
// =============================================================================

/// A single command in a pipeline
#[derive(Debug, Clone)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// A pipeline of commands connected by pipes
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub commands: Vec<ParsedCommand>,
    /// Syntax error (e.g., empty pipe stage)
    pub error: Option<ParseError>,
}

impl Pipeline {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the first command name (if any)
    pub fn first_command_name(&self) -> Option<&str> {
        self.commands.first().map(|c| c.name.as_str())
    }

    #[cfg(test)]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

// =============================================================================
// Parser
// =============================================================================

/// Parse an input line with variable and history expansion, then build the
/// pipeline. `history` is the recall buffer's entries, oldest first.
pub fn parse_input(input: &str, history: &[String], env: &EnvStore) -> Pipeline {
    let tokens = Lexer::new(input, env).tokenize();
    let expanded = expand_tokens(tokens, history, env);
    parse_pipeline(expanded)
}

fn parse_pipeline(tokens: Vec<Token>) -> Pipeline {
    let mut commands = Vec::new();
    let mut current_words = Vec::new();
    let mut error: Option<ParseError> = None;
    let mut expect_command = false; // true after seeing a pipe
    let mut last_pipe_pos = 0;

    for (idx, token) in tokens.into_iter().enumerate() {
        match token {
            Token::Word(w) if !w.is_empty() => {
                current_words.push(w);
                expect_command = false;
            }
            Token::Pipe => {
                if current_words.is_empty() {
                    error = if commands.is_empty() {
                        Some(ParseError::UnexpectedPipe { position: idx })
                    } else {
                        Some(ParseError::EmptyPipeStage { position: idx })
                    };
                    break;
                }
                commands.push(words_to_command(&current_words));
                current_words.clear();
                expect_command = true;
                last_pipe_pos = idx;
            }
            _ => {}
        }
    }

    if error.is_none() && expect_command && current_words.is_empty() {
        error = Some(ParseError::TrailingPipe {
            position: last_pipe_pos,
        });
    }

    if !current_words.is_empty() {
        commands.push(words_to_command(&current_words));
    }

    Pipeline { commands, error }
}

fn words_to_command(words: &[String]) -> ParsedCommand {
    ParsedCommand {
        name: words.first().cloned().unwrap_or_default(),
        args: words.iter().skip(1).cloned().collect(),
    }
}

// =============================================================================
// Tests
// =============================================================================
