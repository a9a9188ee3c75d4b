//! Tab autocomplete for commands and paths.
//!
//! Provides completion for:
//! - Command names (e.g., "cl" -> "clear")
//! - Directory paths for `cd`, `ls`
//! - File paths for `cat`
//!
//! Supports single-match completion, common-prefix completion over multiple
//! matches, and ghost text hints while typing.

use crate::core::commands::Command;
use crate::core::filesystem::{DirEntry, VirtualFs};
use crate::models::VirtualPath;

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum AutocompleteResult {
    /// Single exact match - complete with this value.
    Single(String),
    /// Multiple matches - (common_prefix, all_matches).
    Multiple(String, Vec<String>),
    /// No matches found.
    None,
}

// ============================================================================
// Configuration
// ============================================================================

/// Commands whose path argument must be a directory.
const DIR_COMMANDS: &[&str] = &["cd", "ls"];

/// Commands whose path argument may be a file.
const FILE_COMMANDS: &[&str] = &["cat"];

// ============================================================================
// Completion Context
// ============================================================================

/// What kind of completion the input calls for.
#[derive(Debug, Clone, Copy, PartialEq)]
enum CompletionMode {
    /// Complete command names only.
    Command,
    /// Complete directory paths (for cd, ls).
    DirectoryPath,
    /// Complete any paths (for cat).
    FilePath,
    /// No completion available.
    None,
}

impl CompletionMode {
    fn from_input(input: &str) -> (Self, Vec<&str>) {
        let parts: Vec<&str> = input.splitn(2, ' ').collect();

        if parts.len() == 1 {
            return (Self::Command, parts);
        }

        let cmd_lower = parts[0].to_lowercase();
        let mode = if DIR_COMMANDS.contains(&cmd_lower.as_str()) {
            Self::DirectoryPath
        } else if FILE_COMMANDS.contains(&cmd_lower.as_str()) {
            Self::FilePath
        } else {
            Self::None
        };

        (mode, parts)
    }

    fn dirs_only(self) -> bool {
        matches!(self, Self::DirectoryPath)
    }
}

// ============================================================================
// Path Parsing
// ============================================================================

/// Partial path split for completion.
struct ParsedPath<'a> {
    /// Directory prefix including trailing slash (e.g., "notes/" or "").
    dir_part: &'a str,
    /// Name fragment being completed.
    name_part: &'a str,
    /// Resolved directory to search in.
    search_dir: VirtualPath,
}

impl<'a> ParsedPath<'a> {
    fn parse(partial: &'a str, current_path: &VirtualPath, fs: &VirtualFs) -> Option<Self> {
        let (dir_part, name_part) = match partial.rfind('/') {
            Some(idx) => (&partial[..=idx], &partial[idx + 1..]),
            None => ("", partial),
        };

        let search_dir = if dir_part.is_empty() {
            current_path.clone()
        } else {
            let resolved = fs.resolve_path(current_path, dir_part.trim_end_matches('/'))?;
            if !fs.is_directory(resolved.as_str()) {
                return None;
            }
            resolved
        };

        Some(Self {
            dir_part,
            name_part,
            search_dir,
        })
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Perform autocomplete on Tab press.
pub fn autocomplete(input: &str, current_path: &VirtualPath, fs: &VirtualFs) -> AutocompleteResult {
    let input = input.trim_start();
    if input.is_empty() {
        return AutocompleteResult::None;
    }

    let (mode, parts) = CompletionMode::from_input(input);

    match mode {
        CompletionMode::Command => complete_command(parts[0]),
        CompletionMode::DirectoryPath | CompletionMode::FilePath => {
            complete_path(parts[0], parts[1], current_path, fs, mode.dirs_only())
        }
        CompletionMode::None => AutocompleteResult::None,
    }
}

/// Ghost text hint while typing: the suffix that would complete the input.
pub fn get_hint(input: &str, current_path: &VirtualPath, fs: &VirtualFs) -> Option<String> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }

    let (mode, parts) = CompletionMode::from_input(input);

    match mode {
        CompletionMode::Command => get_command_hint(parts[0]),
        CompletionMode::DirectoryPath | CompletionMode::FilePath => {
            get_path_hint(parts[1], current_path, fs, mode.dirs_only())
        }
        CompletionMode::None => None,
    }
}

// ============================================================================
// Command Completion
// ============================================================================

fn complete_command(partial: &str) -> AutocompleteResult {
    let partial_lower = partial.to_lowercase();
    let matches: Vec<String> = Command::names()
        .iter()
        .filter(|cmd| cmd.starts_with(&partial_lower))
        .map(|s| s.to_string())
        .collect();

    match matches.len() {
        0 => AutocompleteResult::None,
        1 => AutocompleteResult::Single(format!("{} ", matches[0])),
        _ => {
            let common = find_common_prefix(&matches);
            AutocompleteResult::Multiple(common, matches)
        }
    }
}

fn get_command_hint(partial: &str) -> Option<String> {
    let partial_lower = partial.to_lowercase();
    Command::names()
        .iter()
        .find(|cmd| cmd.starts_with(&partial_lower) && **cmd != partial_lower)
        .map(|cmd| cmd[partial.len()..].to_string())
}

// ============================================================================
// Path Completion
// ============================================================================

fn complete_path(
    cmd: &str,
    partial: &str,
    current_path: &VirtualPath,
    fs: &VirtualFs,
    dirs_only: bool,
) -> AutocompleteResult {
    let Some(parsed) = ParsedPath::parse(partial, current_path, fs) else {
        return AutocompleteResult::None;
    };

    let Some(entries) = fs.list_dir(parsed.search_dir.as_str()) else {
        return AutocompleteResult::None;
    };

    let matches = matching_entries(&entries, parsed.name_part, dirs_only);
    build_path_result(cmd, &parsed, matches)
}

fn get_path_hint(
    partial: &str,
    current_path: &VirtualPath,
    fs: &VirtualFs,
    dirs_only: bool,
) -> Option<String> {
    let parsed = ParsedPath::parse(partial, current_path, fs)?;
    let entries = fs.list_dir(parsed.search_dir.as_str())?;
    let matches = matching_entries(&entries, parsed.name_part, dirs_only);

    let name_lower = parsed.name_part.to_lowercase();
    matches
        .iter()
        .find(|entry| entry.name.to_lowercase() != name_lower)
        .map(|entry| {
            let suffix = if entry.is_dir { "/" } else { "" };
            format!("{}{}", &entry.name[parsed.name_part.len()..], suffix)
        })
}

/// Entries whose name starts with the fragment (case-insensitive).
fn matching_entries<'a>(
    entries: &'a [DirEntry],
    name_part: &str,
    dirs_only: bool,
) -> Vec<&'a DirEntry> {
    let name_lower = name_part.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            if dirs_only && !entry.is_dir {
                return false;
            }
            entry.name.to_lowercase().starts_with(&name_lower)
        })
        .collect()
}

fn build_path_result(
    cmd: &str,
    parsed: &ParsedPath,
    matches: Vec<&DirEntry>,
) -> AutocompleteResult {
    let full_matches: Vec<(String, bool)> = matches
        .iter()
        .map(|entry| (format!("{}{}", parsed.dir_part, entry.name), entry.is_dir))
        .collect();

    match full_matches.len() {
        0 => AutocompleteResult::None,
        1 => {
            let (path, is_dir) = &full_matches[0];
            let suffix = if *is_dir { "/" } else { " " };
            AutocompleteResult::Single(format!("{} {}{}", cmd, path, suffix))
        }
        _ => {
            let paths: Vec<String> = full_matches.iter().map(|(p, _)| p.clone()).collect();
            let common = find_common_prefix(&paths);

            let display_names: Vec<String> = full_matches
                .iter()
                .map(|(path, is_dir)| {
                    let name = path.rsplit('/').next().unwrap_or(path);
                    if *is_dir {
                        format!("{}/", name)
                    } else {
                        name.to_string()
                    }
                })
                .collect();

            AutocompleteResult::Multiple(format!("{} {}", cmd, common), display_names)
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Common prefix of multiple strings (case-insensitive comparison).
fn find_common_prefix(strings: &[String]) -> String {
    if strings.is_empty() {
        return String::new();
    }
    if strings.len() == 1 {
        return strings[0].clone();
    }

    let first = &strings[0];
    let mut prefix_len = first.len();

    for s in &strings[1..] {
        prefix_len = first
            .chars()
            .zip(s.chars())
            .take(prefix_len)
            .take_while(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
            .count();
    }

    first[..prefix_len].to_string()
}

// ============================================================================
// Tests
// ============================================================================
