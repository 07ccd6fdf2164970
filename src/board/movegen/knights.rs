use super::super::{Color, Position, Square, SquareSet};
use super::KNIGHT_TARGETS;

impl Position {
    pub(crate) fn knight_moves(&self, from: Square, color: Color) -> SquareSet {
        KNIGHT_TARGETS[from.as_index()]
            .iter()
            .filter(|&to| self.board.get(to).color() != Some(color))
            .collect()
    }
}
