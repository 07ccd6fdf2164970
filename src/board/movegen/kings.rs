use super::super::{CastleSide, Color, PieceKind, Position, Square, SquareSet};
use super::KING_TARGETS;

/// Home column of both kings.
const KING_HOME_COL: usize = 4;

/// Columns strictly between king and rook that must be empty.
const fn between_cols(side: CastleSide) -> &'static [usize] {
    match side {
        CastleSide::KingSide => &[5, 6],
        CastleSide::QueenSide => &[1, 2, 3],
    }
}

/// Columns the king stands on, crosses and lands on; none may be attacked.
/// On the queen side the b-file square only has to be empty.
const fn king_path_cols(side: CastleSide) -> &'static [usize] {
    match side {
        CastleSide::KingSide => &[4, 5, 6],
        CastleSide::QueenSide => &[4, 3, 2],
    }
}

impl Position {
    pub(crate) fn king_moves(&self, from: Square, color: Color, skip_castling: bool) -> SquareSet {
        let steps: SquareSet = KING_TARGETS[from.as_index()]
            .iter()
            .filter(|&to| self.board.get(to).color() != Some(color))
            .collect();

        if skip_castling {
            steps
        } else {
            steps.union(self.castling_moves(from, color))
        }
    }

    fn castling_moves(&self, from: Square, color: Color) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        let home = color.home_row();
        if from != Square(home, KING_HOME_COL) || !self.board.get(from).is(color, PieceKind::King) {
            return moves;
        }

        let enemy = color.opponent();
        for side in CastleSide::BOTH {
            if !self.castling.has(color, side) {
                continue;
            }
            // A captured rook leaves its corner empty or enemy-occupied, which
            // is what keeps stale rights from ever castling.
            if !self
                .board
                .get(Square(home, side.rook_col()))
                .is(color, PieceKind::Rook)
            {
                continue;
            }
            if between_cols(side)
                .iter()
                .any(|&col| !self.board.is_empty(Square(home, col)))
            {
                continue;
            }
            if king_path_cols(side)
                .iter()
                .any(|&col| self.is_attacked(Square(home, col), enemy))
            {
                continue;
            }
            moves.insert(Square(home, side.king_target_col()));
        }

        moves
    }
}
