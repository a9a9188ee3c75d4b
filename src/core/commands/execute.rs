//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and returns results. Handlers surface
//! every failure as an error output line; nothing here panics or aborts
//! the session.

use chrono::Local;

use crate::config::{ASCII_BANNER, USER_NAME};
use crate::core::env::EnvStore;
use crate::core::error::ShellError;
use crate::core::filesystem::VirtualFs;
use crate::models::{OutputLine, VirtualPath};

use super::{Command, CommandResult, PathArg};

/// Execute a parsed command and return its result.
///
/// # Arguments
///
/// * `cmd` - The parsed command to execute
/// * `fs` - Virtual filesystem
/// * `current_path` - Working path relative paths resolve against
/// * `env` - Environment store (mutated by export/unset)
pub fn execute_command(
    cmd: Command,
    fs: &VirtualFs,
    current_path: &VirtualPath,
    env: &mut EnvStore,
) -> CommandResult {
    match cmd {
        Command::Ls { path } => execute_ls(path, fs, current_path),
        Command::Cd(path) => execute_cd(path, fs, current_path),
        Command::Pwd => CommandResult::output(vec![OutputLine::text(current_path.display())]),
        Command::Cat(file) => execute_cat(file, fs, current_path),
        Command::Whoami => CommandResult::output(vec![OutputLine::text(USER_NAME)]),
        Command::Date => {
            // Locale-default human-readable form.
            let now = Local::now().format("%c").to_string();
            CommandResult::output(vec![OutputLine::text(now)])
        }
        Command::Help => execute_help(),
        Command::Clear => CommandResult::clear(),
        Command::Welcome => execute_welcome(),
        Command::Echo(text) => execute_echo(text),
        Command::Export(arg) => execute_export(arg, env),
        Command::Unset(key) => execute_unset(key, env),
        Command::Invalid(err) => CommandResult::output(vec![OutputLine::error(err.to_string())]),
        Command::Unknown(name) => CommandResult::output(vec![OutputLine::error(
            ShellError::UnknownCommand(name).to_string(),
        )]),
    }
}

/// Execute `ls`: list the target directory, default the working path.
fn execute_ls(path: Option<PathArg>, fs: &VirtualFs, current_path: &VirtualPath) -> CommandResult {
    let target = path.as_ref().map(|p| p.as_str()).unwrap_or(".");
    let resolved = match &path {
        Some(p) => fs.resolve_path(current_path, p.as_str()),
        None => Some(current_path.clone()),
    };

    match resolved {
        Some(resolved_path) => match fs.list_dir(resolved_path.as_str()) {
            Some(entries) => {
                let output = entries
                    .iter()
                    .map(|entry| OutputLine::list_entry(&entry.name, entry.is_dir))
                    .collect();
                CommandResult::output(output)
            }
            None => CommandResult::output(vec![OutputLine::error(
                ShellError::not_a_directory("ls", target).to_string(),
            )]),
        },
        None => CommandResult::output(vec![OutputLine::error(
            ShellError::path_not_found("ls", target).to_string(),
        )]),
    }
}

/// Execute `cd`: move the working path to a verified directory.
fn execute_cd(path: PathArg, fs: &VirtualFs, current_path: &VirtualPath) -> CommandResult {
    match fs.resolve_path(current_path, path.as_str()) {
        Some(new_path) if fs.is_directory(new_path.as_str()) => CommandResult::navigate(new_path),
        Some(_) => CommandResult::output(vec![OutputLine::error(
            ShellError::not_a_directory("cd", path.as_str()).to_string(),
        )]),
        None => CommandResult::output(vec![OutputLine::error(
            ShellError::path_not_found("cd", path.as_str()).to_string(),
        )]),
    }
}

/// Execute `cat`: print a file's content, one history line per text line.
fn execute_cat(file: PathArg, fs: &VirtualFs, current_path: &VirtualPath) -> CommandResult {
    match fs.resolve_path(current_path, file.as_str()) {
        Some(resolved) => match fs.read_file(resolved.as_str()) {
            Some(content) => {
                let output = content.lines().map(OutputLine::text).collect();
                CommandResult::output(output)
            }
            None => CommandResult::output(vec![OutputLine::error(
                ShellError::not_a_file("cat", file.as_str()).to_string(),
            )]),
        },
        None => CommandResult::output(vec![OutputLine::error(
            ShellError::path_not_found("cat", file.as_str()).to_string(),
        )]),
    }
}

/// Execute `echo`: print the joined arguments, or a fixed fallback.
fn execute_echo(text: String) -> CommandResult {
    if text.is_empty() {
        CommandResult::output(vec![OutputLine::text("Nothing to echo")])
    } else {
        CommandResult::output(vec![OutputLine::text(text)])
    }
}

/// Execute `help`: list every registered command with its description.
fn execute_help() -> CommandResult {
    let mut lines = vec![OutputLine::info("Available commands:")];
    let width = Command::descriptions()
        .iter()
        .map(|(usage, _)| usage.len())
        .max()
        .unwrap_or(0);
    for (usage, description) in Command::descriptions() {
        lines.push(OutputLine::text(format!(
            "  {:width$}  {}",
            usage,
            description,
            width = width
        )));
    }
    lines.push(OutputLine::text(
        "  <cmd> | grep/head/tail/wc  Filter command output",
    ));
    CommandResult::output(lines)
}

/// Execute `welcome`: re-print the session banner.
fn execute_welcome() -> CommandResult {
    CommandResult::output(banner_lines())
}

/// Banner lines shown at session start and by `welcome`.
pub fn banner_lines() -> Vec<OutputLine> {
    vec![
        OutputLine::ascii(ASCII_BANNER.trim_end_matches('\n')),
        OutputLine::text("Type 'help' for available commands."),
        OutputLine::empty(),
    ]
}

/// Execute `export`: list variables, set `KEY=value`, or show one key.
fn execute_export(arg: Option<String>, env: &mut EnvStore) -> CommandResult {
    match arg {
        None => {
            let output = env
                .format_export_output()
                .into_iter()
                .map(OutputLine::text)
                .collect();
            CommandResult::output(output)
        }
        Some(assignment) => {
            if let Some((key, value)) = assignment.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"').trim_matches('\'');
                match env.set(key, value) {
                    Ok(()) => CommandResult::empty(),
                    Err(e) => {
                        CommandResult::output(vec![OutputLine::error(format!("export: {}", e))])
                    }
                }
            } else {
                // Just a key: show its current value
                let key = assignment.trim();
                match env.get(key) {
                    Some(value) => {
                        CommandResult::output(vec![OutputLine::text(format!("{}={}", key, value))])
                    }
                    None => CommandResult::empty(),
                }
            }
        }
    }
}

/// Execute `unset`. Removing an absent variable silently succeeds.
fn execute_unset(key: String, env: &mut EnvStore) -> CommandResult {
    env.unset(&key);
    CommandResult::empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileEntry, Manifest, OutputLineData};

    fn test_fs() -> VirtualFs {
        VirtualFs::from_manifest(&Manifest {
            files: vec![
                FileEntry {
                    path: "README.md".to_string(),
                    content: "hello".to_string(),
                },
                FileEntry {
                    path: "notes/todo.md".to_string(),
                    content: "line one\nline two".to_string(),
                },
            ],
            directories: vec![],
        })
    }

    fn run(cmd: Command) -> CommandResult {
        let fs = test_fs();
        let mut env = EnvStore::new();
        execute_command(cmd, &fs, &VirtualPath::root(), &mut env)
    }

    fn texts(result: &CommandResult) -> Vec<String> {
        result
            .output
            .iter()
            .filter_map(|l| match &l.data {
                OutputLineData::Text(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_ls_lists_working_dir() {
        let result = run(Command::Ls { path: None });
        let names: Vec<_> = result
            .output
            .iter()
            .filter_map(|l| match &l.data {
                OutputLineData::ListEntry { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["notes", "README.md"]);
        assert!(result.new_path.is_none());
    }

    #[test]
    fn test_ls_on_file_errors() {
        let result = run(Command::Ls {
            path: Some(PathArg::new("README.md")),
        });
        assert!(matches!(
            &result.output[0].data,
            OutputLineData::Error(s) if s.contains("Not a directory")
        ));
    }

    #[test]
    fn test_ls_missing_errors() {
        let result = run(Command::Ls {
            path: Some(PathArg::new("missing")),
        });
        assert!(matches!(
            &result.output[0].data,
            OutputLineData::Error(s) if s.contains("No such file or directory")
        ));
    }

    #[test]
    fn test_cd_navigates() {
        let result = run(Command::Cd(PathArg::new("notes")));
        assert_eq!(result.new_path.unwrap().as_str(), "notes");
        assert!(result.output.is_empty());
    }

    #[test]
    fn test_cd_to_file_errors() {
        let result = run(Command::Cd(PathArg::new("README.md")));
        assert!(result.new_path.is_none());
        assert!(matches!(
            &result.output[0].data,
            OutputLineData::Error(s) if s.contains("Not a directory")
        ));
    }

    #[test]
    fn test_cd_missing_errors() {
        let result = run(Command::Cd(PathArg::new("~/missing")));
        assert!(result.new_path.is_none());
        assert!(matches!(
            &result.output[0].data,
            OutputLineData::Error(s) if s == "cd: ~/missing: No such file or directory"
        ));
    }

    #[test]
    fn test_cat_prints_content_lines() {
        let result = run(Command::Cat(PathArg::new("notes/todo.md")));
        assert_eq!(texts(&result), vec!["line one", "line two"]);
    }

    #[test]
    fn test_cat_on_directory_errors() {
        let result = run(Command::Cat(PathArg::new("notes")));
        assert!(matches!(
            &result.output[0].data,
            OutputLineData::Error(s) if s.contains("Is a directory")
        ));
    }

    #[test]
    fn test_echo() {
        let result = run(Command::Echo("hello world".to_string()));
        assert_eq!(texts(&result), vec!["hello world"]);
    }

    #[test]
    fn test_echo_empty() {
        let result = run(Command::Echo(String::new()));
        assert_eq!(texts(&result), vec!["Nothing to echo"]);
    }

    #[test]
    fn test_whoami_fixed_identity() {
        let result = run(Command::Whoami);
        assert_eq!(texts(&result), vec![USER_NAME.to_string()]);
    }

    #[test]
    fn test_date_nonempty() {
        let result = run(Command::Date);
        assert_eq!(result.output.len(), 1);
        assert!(!texts(&result)[0].is_empty());
    }

    #[test]
    fn test_help_lists_commands() {
        let result = run(Command::Help);
        let all: String = texts(&result).join("\n");
        for name in ["help", "clear", "ls", "cd", "cat", "whoami", "date", "echo"] {
            assert!(all.contains(name), "help output missing {}", name);
        }
    }

    #[test]
    fn test_clear_sets_flag() {
        let result = run(Command::Clear);
        assert!(result.clear_history);
        assert!(result.output.is_empty());
        assert!(result.new_path.is_none());
    }

    #[test]
    fn test_unknown_command_message() {
        let result = run(Command::Unknown("bogus-cmd".to_string()));
        assert!(matches!(
            &result.output[0].data,
            OutputLineData::Error(s) if s.starts_with("command not found: bogus-cmd")
        ));
        assert!(result.new_path.is_none());
        assert!(!result.clear_history);
    }

    #[test]
    fn test_export_set_and_show() {
        let fs = test_fs();
        let mut env = EnvStore::new();
        let result = execute_command(
            Command::Export(Some("FOO=bar".to_string())),
            &fs,
            &VirtualPath::root(),
            &mut env,
        );
        assert!(result.output.is_empty());
        assert_eq!(env.get("FOO"), Some("bar"));

        let result = execute_command(
            Command::Export(Some("FOO".to_string())),
            &fs,
            &VirtualPath::root(),
            &mut env,
        );
        assert_eq!(texts(&result), vec!["FOO=bar"]);
    }

    #[test]
    fn test_export_invalid_name() {
        let fs = test_fs();
        let mut env = EnvStore::new();
        let result = execute_command(
            Command::Export(Some("1bad=x".to_string())),
            &fs,
            &VirtualPath::root(),
            &mut env,
        );
        assert!(matches!(
            &result.output[0].data,
            OutputLineData::Error(s) if s.starts_with("export:")
        ));
    }

    #[test]
    fn test_unset() {
        let fs = test_fs();
        let mut env = EnvStore::new();
        env.set("FOO", "bar").unwrap();
        let result = execute_command(
            Command::Unset("FOO".to_string()),
            &fs,
            &VirtualPath::root(),
            &mut env,
        );
        assert!(result.output.is_empty());
        assert_eq!(env.get("FOO"), None);
    }
}
