//! Text the console prints.

use std::fmt::Write;
use std::time::Duration;

use crate::board::{GameStatus, Position, RenderStyle, Square};
use crate::game::{Game, MoveRecord};

pub const HELP: &str = "\
commands:
  e2e4         move a piece (from square, to square)
  moves <sq>   show the legal moves of the piece on <sq>
  board        redraw the board
  history      list the moves played
  resign       resign for the side to move
  draw         offer a draw for the side to move
  accept       accept the pending draw offer
  decline      decline the pending draw offer
  new          start a new game
  perft <n>    count leaf nodes to depth <n> (at most 5)
  help         show this text
  quit         leave";

/// One line describing where the game stands.
#[must_use]
pub fn format_status(game: &Game) -> String {
    if let Some(outcome) = game.outcome() {
        return outcome.message();
    }
    let status = game.status();
    match status.status {
        GameStatus::Check => format!("Check! {} to move", status.color),
        _ => format!("{} to move", status.color),
    }
}

#[must_use]
pub fn format_moves(position: &Position, from: Square, style: RenderStyle) -> String {
    let targets = position.legal_moves(from);
    if targets.is_empty() {
        return format!("No legal moves from {from}");
    }
    let list: Vec<String> = targets.iter().map(|to| to.to_string()).collect();
    format!(
        "{}{from}: {}",
        position.render_highlighted(from, style),
        list.join(" ")
    )
}

/// Moves in numbered pairs: `1. e2e4 e7e5`.
#[must_use]
pub fn format_history(history: &[MoveRecord]) -> String {
    if history.is_empty() {
        return "No moves yet".to_string();
    }
    let mut out = String::new();
    for (i, pair) in history.chunks(2).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{}.", i + 1);
        for record in pair {
            let _ = write!(out, " {}", record.mv);
        }
    }
    out
}

#[must_use]
pub fn format_perft(depth: usize, nodes: u64, elapsed: Duration) -> String {
    format!(
        "perft depth {} nodes {} time_ms {}",
        depth,
        nodes,
        elapsed.as_millis()
    )
}
