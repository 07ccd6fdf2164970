use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

use chess_rules::board::{Move, Position};

fn check_mate_status(moves: &[&str]) -> (bool, String) {
    let exe = env!("CARGO_BIN_EXE_check_mate_status");
    let output = Command::new(exe)
        .args(moves)
        .output()
        .expect("failed to run check_mate_status");
    (
        output.status.success(),
        String::from_utf8(output.stdout).expect("utf-8 output"),
    )
}

#[test]
fn check_mate_status_reports_fools_mate() {
    let (ok, out) = check_mate_status(&["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(ok);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "side_to_move: white");
    assert_eq!(lines[1], "legal_moves: 0");
    assert_eq!(lines[2], "status: checkmate");
    assert_eq!(lines[3], "checkmate: true");
    assert_eq!(lines[4], "stalemate: false");
    assert_eq!(lines.len(), 5);
}

#[test]
fn check_mate_status_lists_legal_moves() {
    let (ok, out) = check_mate_status(&["e2e4"]);
    assert!(ok);
    assert!(out.contains("side_to_move: black"));
    assert!(out.contains("legal_moves: 20"));
    assert!(out.contains("status: ongoing"));

    let listed: Vec<Move> = out
        .lines()
        .skip(5)
        .map(|line| line.parse().expect("coordinate move"))
        .collect();
    let position = Position::initial()
        .apply_move("e2".parse().unwrap(), "e4".parse().unwrap())
        .unwrap()
        .pass_turn();
    assert_eq!(listed, position.legal_moves_for_color(position.side_to_move()));
}

#[test]
fn check_mate_status_rejects_illegal_move() {
    let (ok, _) = check_mate_status(&["e2e5"]);
    assert!(!ok);
}

#[test]
fn console_smoke_test() {
    let exe = env!("CARGO_BIN_EXE_chess_rules");
    let mut child = Command::new(exe)
        .arg("--no-board")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn console binary");

    let mut stdin = child.stdin.take().unwrap();
    stdin
        .write_all(b"e2e4\ne7e5\nmoves g1\nhistory\nquit\n")
        .unwrap();
    drop(stdin);

    let reader = BufReader::new(child.stdout.take().unwrap());
    let output: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("console exits");
    assert!(status.success());

    let output = output.join("\n");
    assert!(output.contains("Black to move"));
    assert!(output.contains("g1: f3 h3 e2"));
    assert!(output.contains("1. e2e4 e7e5"));
}

#[test]
fn console_rejects_unknown_flag() {
    let exe = env!("CARGO_BIN_EXE_chess_rules");
    let status = Command::new(exe)
        .arg("--hash")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("failed to run console binary");
    assert!(!status.success());
}
