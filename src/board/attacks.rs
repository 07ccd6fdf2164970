//! Attack and check detection.

use super::{Color, Position, Square};

impl Position {
    /// True if any piece of `by` attacks `square`.
    ///
    /// Each attacker contributes its skip-castling pseudo-legal move set. A
    /// pawn reaches a diagonal only when something of the other color stands
    /// there, so an empty square beside an enemy pawn is not attacked.
    #[must_use]
    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        self.board
            .pieces_of(by)
            .any(|(from, _)| self.pseudo_moves(from, true).contains(square))
    }

    /// Squares of `by`'s pieces attacking `square`, in square order.
    #[must_use]
    pub fn attackers_of(&self, square: Square, by: Color) -> Vec<Square> {
        self.board
            .pieces_of(by)
            .filter(|&(from, _)| self.pseudo_moves(from, true).contains(square))
            .map(|(from, _)| from)
            .collect()
    }

    /// Square of `color`'s king, if it is on the board.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.board.find_king(color)
    }

    /// True if `color`'s king is attacked. A side without a king is never in
    /// check.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_attacked(king, color.opponent()))
    }
}
