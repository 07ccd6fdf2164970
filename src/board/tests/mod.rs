//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece generation and legal filtering
//! - `castling.rs` - Castling generation, execution and rights
//! - `apply.rs` - Move application side effects
//! - `status.rs` - Check, checkmate and stalemate
//! - `edge_cases.rs` - Unusual positions
//! - `perft.rs` - Node counts against known values
//! - `proptest.rs` - Property-based tests

mod proptest;
mod status;

use crate::board::{Position, PositionBuilder, Square, SquareSet};

/// Build a position from a diagram, row 0 first.
pub(super) fn diagram(rows: [&str; 8]) -> PositionBuilder {
    PositionBuilder::from_rows(&rows).expect("valid diagram")
}

pub(super) fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

pub(super) fn squares(list: &[&str]) -> SquareSet {
    list.iter().map(|s| sq(s)).collect()
}

/// Apply a move in coordinate notation and hand the turn over.
pub(super) fn play(position: &Position, mv: &str) -> Position {
    let (from, to) = (sq(&mv[0..2]), sq(&mv[2..4]));
    position
        .apply_move(from, to)
        .unwrap_or_else(|e| panic!("{mv}: {e}"))
        .pass_turn()
}
