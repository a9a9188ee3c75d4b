//! Pipe filter commands (grep, head, tail, wc).
//!
//! These filters operate on output lines from other commands, enabling
//! Unix-style piping: `ls | grep foo | head -5`

use regex::RegexBuilder;

use crate::config::pipe_filters;
use crate::models::{OutputLine, OutputLineData};

/// Apply a filter command to output lines.
///
/// # Supported filters
/// - `grep <pattern>`: keep lines matching pattern (case-insensitive regex)
/// - `head [-n]`: take first n lines (default: 10)
/// - `tail [-n]`: take last n lines (default: 10)
/// - `wc`: count non-empty lines
pub fn apply_filter(cmd: &str, args: &[String], lines: Vec<OutputLine>) -> Vec<OutputLine> {
    match cmd.to_lowercase().as_str() {
        "grep" => filter_grep(args, lines),
        "head" => filter_head(args, lines),
        "tail" => filter_tail(args, lines),
        "wc" => filter_wc(lines),
        _ => vec![OutputLine::error(format!(
            "pipe: unknown filter '{}'. Supported: grep, head, tail, wc",
            cmd
        ))],
    }
}

/// Keep lines whose text matches the pattern, case-insensitively.
fn filter_grep(args: &[String], lines: Vec<OutputLine>) -> Vec<OutputLine> {
    let Some(pattern) = args.first().filter(|p| !p.is_empty()) else {
        return vec![OutputLine::error("grep: missing pattern")];
    };

    let regex = match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(re) => re,
        Err(_) => return vec![OutputLine::error(format!("grep: invalid pattern '{}'", pattern))],
    };

    lines
        .into_iter()
        .filter(|line| line_text(&line.data).is_some_and(|s| regex.is_match(s)))
        .collect()
}

/// The searchable text of an output line, `None` for empty lines.
fn line_text(data: &OutputLineData) -> Option<&str> {
    match data {
        OutputLineData::Text(s)
        | OutputLineData::Error(s)
        | OutputLineData::Success(s)
        | OutputLineData::Info(s)
        | OutputLineData::Ascii(s) => Some(s),
        OutputLineData::ListEntry { name, .. } => Some(name),
        OutputLineData::Command { input, .. } => Some(input),
        OutputLineData::Empty => None,
    }
}

/// Take first n lines.
fn filter_head(args: &[String], lines: Vec<OutputLine>) -> Vec<OutputLine> {
    let n = parse_count_arg(args, pipe_filters::DEFAULT_HEAD_LINES);
    lines.into_iter().take(n).collect()
}

/// Take last n lines.
fn filter_tail(args: &[String], lines: Vec<OutputLine>) -> Vec<OutputLine> {
    let n = parse_count_arg(args, pipe_filters::DEFAULT_TAIL_LINES);
    let len = lines.len();
    lines.into_iter().skip(len.saturating_sub(n)).collect()
}

/// Count non-empty lines.
fn filter_wc(lines: Vec<OutputLine>) -> Vec<OutputLine> {
    let count = lines
        .iter()
        .filter(|l| !matches!(l.data, OutputLineData::Empty))
        .count();
    vec![OutputLine::text(count.to_string())]
}

/// Parse a count argument like "5" or "-5".
fn parse_count_arg(args: &[String], default: usize) -> usize {
    args.first()
        .and_then(|s| s.trim_start_matches('-').parse().ok())
        .unwrap_or(default)
}
