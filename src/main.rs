//! Interactive REPL front end for the demosh terminal core.
//!
//! A minimal presentation adapter: reads lines from stdin, feeds them to a
//! [`Session`], and renders the history delta after each submission. Line
//! editing and arrow-key recall are left to the hosting terminal; richer
//! front ends drive `recall_previous`/`recall_next` themselves.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use demosh::{Manifest, OutputLine, OutputLineData, Session, TextStyle, VirtualFs, demo_fs};

/// Interactive in-memory demo shell.
#[derive(Parser, Debug)]
#[command(name = "demosh", version, about)]
struct Args {
    /// Load the filesystem from a JSON manifest file instead of the
    /// built-in demo tree.
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Suppress the startup banner.
    #[arg(long)]
    quiet: bool,

    /// Disable ANSI colors in output.
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let fs = match &args.manifest {
        Some(path) => match load_manifest(path) {
            Ok(manifest) => VirtualFs::from_manifest(&manifest),
            Err(e) => {
                eprintln!("demosh: {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => demo_fs(),
    };

    let mut session = if args.quiet {
        Session::bare(fs)
    } else {
        Session::new(fs)
    };

    let renderer = Renderer {
        color: !args.no_color,
    };
    for line in session.history() {
        renderer.print_line(line);
    }

    run_repl(&mut session, &renderer);
    ExitCode::SUCCESS
}

fn load_manifest(path: &PathBuf) -> Result<Manifest, String> {
    let text = fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&text).map_err(|e| e.to_string())
}

/// Read-eval-print loop over stdin. Ends on EOF or `exit`/`quit`.
fn run_repl(session: &mut Session, renderer: &Renderer) {
    let stdin = io::stdin();
    let mut last_seen_id = max_history_id(session);

    loop {
        print!("{}$ ", session.prompt());
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break, // EOF
            Ok(_) => {}
        }

        // Session-exit is a front-end concern, not a shell command.
        let trimmed = line.trim();
        if trimmed == "exit" || trimmed == "quit" {
            break;
        }

        let len_before = session.history_len();
        session.submit_line(&line);

        if session.history_len() < len_before {
            // History shrank: the command cleared the screen.
            print!("\x1b[2J\x1b[H");
        }
        for entry in session.history() {
            // Line IDs are monotonic, so this finds exactly the new output
            // even after a clear or ring-buffer wraparound. The echo is
            // skipped: the user just typed that line at the prompt.
            if entry.id > last_seen_id && !entry.is_command_echo() {
                renderer.print_line(entry);
            }
        }
        last_seen_id = max_history_id(session).max(last_seen_id);
    }
}

fn max_history_id(session: &Session) -> usize {
    session.history().map(|l| l.id).max().unwrap_or(0)
}

// ============================================================================
// Rendering
// ============================================================================

struct Renderer {
    color: bool,
}

impl Renderer {
    fn print_line(&self, line: &OutputLine) {
        match &line.data {
            OutputLineData::Command { path, input } => {
                println!("{} {}", self.paint(&format!("{}$", path), "1;32"), input);
            }
            OutputLineData::Text(s) => println!("{}", s),
            OutputLineData::Error(s) => println!("{}", self.paint(s, "31")),
            OutputLineData::Success(s) => println!("{}", self.paint(s, "32")),
            OutputLineData::Info(s) => println!("{}", self.paint(s, "33")),
            OutputLineData::Ascii(s) => println!("{}", self.paint(s, "36")),
            OutputLineData::Empty => println!(),
            OutputLineData::ListEntry { name, style } => match style {
                TextStyle::Directory => println!("{}/", self.paint(name, "1;34")),
                TextStyle::Hidden => println!("{}", self.paint(name, "2")),
                TextStyle::File => println!("{}", name),
            },
        }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }
}
