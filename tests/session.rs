//! End-to-end session tests driving the core the way a front end would.

use demosh::{FileEntry, Manifest, OutputLineData, Session, VirtualFs};

/// Root with `~/README.md` (content "hello") and an empty `~/tools/`.
fn scenario_fs() -> VirtualFs {
    let manifest: Manifest = serde_json::from_str(
        r#"{
            "files": [{"path": "README.md", "content": "hello"}],
            "directories": [{"path": "tools"}]
        }"#,
    )
    .expect("scenario manifest parses");
    VirtualFs::from_manifest(&manifest)
}

fn last_texts(session: &Session, n: usize) -> Vec<String> {
    let lines: Vec<_> = session.history().collect();
    lines[lines.len() - n..]
        .iter()
        .map(|l| match &l.data {
            OutputLineData::Text(s)
            | OutputLineData::Error(s)
            | OutputLineData::Info(s)
            | OutputLineData::Success(s) => s.clone(),
            OutputLineData::ListEntry { name, .. } => name.clone(),
            OutputLineData::Command { input, .. } => format!("$ {}", input),
            OutputLineData::Ascii(_) => "<ascii>".to_string(),
            OutputLineData::Empty => String::new(),
        })
        .collect()
}

#[test]
fn scenario_walkthrough() {
    let mut session = Session::bare(scenario_fs());

    // cat ~/README.md -> "hello"
    session.submit_line("cat ~/README.md");
    assert_eq!(last_texts(&session, 1), vec!["hello"]);

    // ls ~/tools -> empty listing (echo is the only new entry)
    let before = session.history_len();
    session.submit_line("ls ~/tools");
    assert_eq!(session.history_len(), before + 1);

    // cd ~/tools, then bare ls lists the tools directory
    session.submit_line("cd ~/tools");
    assert_eq!(session.current_path().display(), "~/tools");
    let before = session.history_len();
    session.submit_line("ls");
    assert_eq!(session.history_len(), before + 1); // echo only, no children

    // cd ~/missing -> error, path unchanged at ~/tools
    session.submit_line("cd ~/missing");
    assert_eq!(
        last_texts(&session, 1),
        vec!["cd: ~/missing: No such file or directory"]
    );
    assert_eq!(session.current_path().display(), "~/tools");

    // echo with no text -> fixed fallback
    session.submit_line("echo   ");
    assert_eq!(last_texts(&session, 1), vec!["Nothing to echo"]);

    // Unknown command -> error, nothing else mutates
    session.submit_line("bogus-cmd");
    let texts = last_texts(&session, 1);
    assert!(texts[0].starts_with("command not found: bogus-cmd"));
    assert_eq!(session.current_path().display(), "~/tools");
}

#[test]
fn ls_and_cat_never_move_the_path() {
    let mut session = Session::bare(scenario_fs());

    session.submit_line("ls ~/tools");
    session.submit_line("cat ~/README.md");
    session.submit_line("ls ~/README.md"); // error: not a directory
    session.submit_line("cat ~/tools"); // error: is a directory
    assert!(session.current_path().is_root());
}

#[test]
fn cd_rejects_files_without_moving() {
    let mut session = Session::bare(scenario_fs());

    session.submit_line("cd ~/README.md");
    assert_eq!(
        last_texts(&session, 1),
        vec!["cd: ~/README.md: Not a directory"]
    );
    assert!(session.current_path().is_root());
}

#[test]
fn clear_empties_any_history_length() {
    let mut session = Session::bare(scenario_fs());

    for _ in 0..50 {
        session.submit_line("cat ~/README.md");
    }
    assert!(session.history_len() >= 100);

    session.submit_line("cd ~/tools");
    session.submit_line("clear");
    assert_eq!(session.history_len(), 0);
    // Neither the path nor the recall buffer were touched
    assert_eq!(session.current_path().display(), "~/tools");
    assert_eq!(session.recall_previous(), Some("clear".to_string()));
}

#[test]
fn recall_round_trip_property() {
    let mut session = Session::bare(scenario_fs());
    session.submit_line("a");
    session.submit_line("b");
    session.submit_line("c");

    assert_eq!(session.recall_previous().as_deref(), Some("c"));
    assert_eq!(session.recall_previous().as_deref(), Some("b"));
    assert_eq!(session.recall_previous().as_deref(), Some("a"));
    assert_eq!(session.recall_next().as_deref(), Some("b"));
}

#[test]
fn malformed_input_keeps_session_usable() {
    let mut session = Session::bare(scenario_fs());

    session.submit_line("| grep x");
    session.submit_line("ls |");
    session.submit_line("cat");
    session.submit_line("!999");

    // Every line above produced at most an error entry; the session still works.
    session.submit_line("cat ~/README.md");
    assert_eq!(last_texts(&session, 1), vec!["hello"]);
}

#[test]
fn pipes_filter_command_output() {
    let manifest: Manifest = serde_json::from_str(
        r#"{"files": [
            {"path": "fruit/apple.md", "content": ""},
            {"path": "fruit/banana.md", "content": ""},
            {"path": "fruit/cherry.md", "content": ""}
        ]}"#,
    )
    .unwrap();
    let mut session = Session::bare(VirtualFs::from_manifest(&manifest));

    session.submit_line("ls fruit | grep an | wc");
    assert_eq!(last_texts(&session, 1), vec!["1"]);

    session.submit_line("ls fruit | head -2");
    assert_eq!(last_texts(&session, 2), vec!["apple.md", "banana.md"]);
}

#[test]
fn environment_round_trip_through_commands() {
    let mut session = Session::bare(scenario_fs());

    session.submit_line("export TARGET=README.md");
    session.submit_line("cat $TARGET");
    assert_eq!(last_texts(&session, 1), vec!["hello"]);

    session.submit_line("unset TARGET");
    session.submit_line("cat $TARGET");
    // $TARGET now expands to nothing, leaving cat without an operand
    assert_eq!(last_texts(&session, 1), vec!["cat: missing operand"]);
}

#[test]
fn manifest_file_round_trips_through_serde() {
    let manifest = Manifest {
        files: vec![FileEntry {
            path: "a/b.md".to_string(),
            content: "body".to_string(),
        }],
        directories: vec![],
    };
    let json = serde_json::to_string(&manifest).unwrap();
    let parsed: Manifest = serde_json::from_str(&json).unwrap();
    let fs = VirtualFs::from_manifest(&parsed);
    assert_eq!(fs.read_file("a/b.md"), Some("body"));
}
