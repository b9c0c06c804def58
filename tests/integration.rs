//! Integration tests for the conquid binary.
//!
//! Spawns the binary, sends commands over stdin, and checks the lines it
//! writes to stdout.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the binary and collects stdout lines.
fn run_shell(args: &[&str], commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_conquid");
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start conquid");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

const SMALL: [&str; 6] = ["--rows", "3", "--cols", "14", "--base-size", "2"];

#[test]
fn startup_renders_the_initial_board() {
    let lines = run_shell(&SMALL, &["quit"]);
    assert_eq!(lines, vec!["board", "....XX..OO....", "....XX..OO....", "..............", "turn 1"]);
}

#[test]
fn default_board_is_fourteen_by_twenty_eight() {
    let lines = run_shell(&[], &["quit"]);
    assert_eq!(lines.len(), 16);
    assert!(lines[1..15].iter().all(|row| row.len() == 28));
    assert_eq!(lines[7], "....XX................OO....");
}

#[test]
fn full_game_to_conquest() {
    let lines = run_shell(
        &SMALL,
        &["move A 0,6 0,7", "confirm", "move A 2,13", "confirm", "corners", "move Q", "confirm", "move C", "quit"],
    );
    assert!(lines.contains(&"staged 1A 0,6 0,7".to_string()));
    assert!(lines.contains(&"turn 2".to_string()));
    assert!(lines.contains(&"corners".to_string()));
    assert!(lines.contains(&"....XXXXOO....".to_string()));

    let tail = &lines[lines.len() - 3..];
    assert_eq!(tail, ["winner 1", "gameover", "ignored"]);
}

#[test]
fn rejected_and_ignored_input() {
    let lines = run_shell(&SMALL, &["", "dance", "move", "move A 0,4", "move C 0,0", "confirm", "back", "quit"]);
    assert_eq!(lines[5], "invalid cell 0,4 is a base cell");
    assert_eq!(lines[6], "invalid unexpected token '0,0'");
    assert_eq!(&lines[7..], ["ignored", "ignored"]);
}

#[test]
fn commands_after_quit_are_not_read() {
    let lines = run_shell(&SMALL, &["quit", "show"]);
    assert_eq!(lines.len(), 5);
}

#[test]
fn history_lists_confirmed_moves() {
    let lines = run_shell(
        &SMALL,
        &["move A 2,0 2,1", "confirm", "move c", "confirm", "move A 2,2", "history", "quit"],
    );
    let idx = lines.iter().position(|l| l.starts_with("moves ")).unwrap();
    assert_eq!(&lines[idx..], ["moves 2", "1A 2,0 2,1", "2C"]);
}

#[test]
fn save_then_load_from_the_command_line() {
    let path = std::env::temp_dir().join(format!("conquid-it-{}.json", std::process::id()));
    let path_str = path.to_string_lossy().into_owned();

    let save_cmd = format!("save {}", path_str);
    let lines = run_shell(&SMALL, &["move A 2,0", "confirm", &save_cmd, "quit"]);
    assert_eq!(lines.last(), Some(&format!("saved {}", path_str)));

    let lines = run_shell(&["--load", &path_str], &["show", "quit"]);
    assert_eq!(lines[3], "x.............");
    assert_eq!(lines.last().map(String::as_str), Some("turn 2"));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn newgame_switches_board() {
    let lines = run_shell(&SMALL, &["newgame 15 30", "newgame 2 2", "quit"]);
    // Initial 3x14 render (5 lines), then 15x30 with ring bases (17 lines).
    assert_eq!(lines.len(), 5 + 17 + 1);
    assert_eq!(lines[12], "....XXX................OOO....");
    assert_eq!(lines[13], "....X.X................O.O....");
    assert_eq!(lines[21], "turn 1");
    assert!(lines.last().unwrap().starts_with("error "));
}
