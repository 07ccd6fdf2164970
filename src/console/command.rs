//! Console command parsing.

use crate::board::{Move, Square};

/// Deepest perft the console will run.
pub const MAX_PERFT_DEPTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Coordinate move for the side to move (`e2e4`)
    Move(Move),
    /// Show the legal destinations of one piece (`moves e2`)
    Moves(Square),
    /// Redraw the board
    Board,
    /// List the moves played so far
    History,
    /// Side to move resigns
    Resign,
    /// Side to move offers a draw
    Draw,
    /// Accept the pending draw offer
    Accept,
    /// Decline the pending draw offer
    Decline,
    /// Start over from the initial position
    New,
    /// Count leaf nodes to the given depth
    Perft(usize),
    Help,
    Quit,
    /// A known command with a malformed argument
    Invalid(String),
    Unknown(String),
}

pub fn parse_console_command(line: &str) -> Option<ConsoleCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let cmd = match parts[0].to_ascii_lowercase().as_str() {
        "moves" => match parts.get(1).map(|s| s.parse::<Square>()) {
            Some(Ok(sq)) => ConsoleCommand::Moves(sq),
            Some(Err(e)) => ConsoleCommand::Invalid(e.to_string()),
            None => ConsoleCommand::Invalid("usage: moves <square>".to_string()),
        },
        "board" => ConsoleCommand::Board,
        "history" => ConsoleCommand::History,
        "resign" => ConsoleCommand::Resign,
        "draw" => ConsoleCommand::Draw,
        "accept" => ConsoleCommand::Accept,
        "decline" => ConsoleCommand::Decline,
        "new" => ConsoleCommand::New,
        "perft" => {
            let depth = parts.get(1).and_then(|v| v.parse::<usize>().ok()).unwrap_or(1);
            if depth > MAX_PERFT_DEPTH {
                ConsoleCommand::Invalid(format!("perft depth is limited to {MAX_PERFT_DEPTH}"))
            } else {
                ConsoleCommand::Perft(depth)
            }
        }
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        word if word.len() == 4 && parts.len() == 1 => match word.parse::<Move>() {
            Ok(mv) => ConsoleCommand::Move(mv),
            Err(e) => ConsoleCommand::Invalid(e.to_string()),
        },
        _ => ConsoleCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
