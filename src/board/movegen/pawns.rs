use super::super::{Color, Position, Square, SquareSet};

impl Position {
    pub(crate) fn pawn_moves(&self, from: Square, color: Color) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.board.is_empty(forward) {
                moves.insert(forward);
                if from.row() == color.pawn_start_row() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if self.board.is_empty(double) {
                            moves.insert(double);
                        }
                    }
                }
            }
        }

        for target in self.pawn_attacks(from, color) {
            if self.board.get(target).color() == Some(color.opponent()) {
                moves.insert(target);
            }
        }

        moves
    }

    /// The two forward diagonals, whatever stands on them.
    pub(crate) fn pawn_attacks(&self, from: Square, color: Color) -> SquareSet {
        let dir = color.pawn_direction();
        [-1, 1]
            .into_iter()
            .filter_map(|dc| from.offset(dir, dc))
            .collect()
    }
}
