//! Producing the next position from a move.

use log::trace;

use super::{CastleSide, Move, MoveError, MoveKind, Piece, PieceKind, Position, Square};

impl Position {
    /// Classify a move from the piece on its source square and its geometry.
    ///
    /// A king travelling two columns castles; a pawn reaching the far rank
    /// promotes. Anything else, including a move from an empty square, is
    /// `Normal`.
    #[must_use]
    pub fn move_kind(&self, mv: Move) -> MoveKind {
        match self.board.piece_at(mv.from) {
            Some(Piece {
                kind: PieceKind::King,
                ..
            }) if mv.col_delta().abs() == 2 => {
                if mv.col_delta() > 0 {
                    MoveKind::Castle(CastleSide::KingSide)
                } else {
                    MoveKind::Castle(CastleSide::QueenSide)
                }
            }
            Some(Piece {
                kind: PieceKind::Pawn,
                color,
            }) if mv.to.row() == color.promotion_row() => MoveKind::Promotion,
            _ => MoveKind::Normal,
        }
    }

    /// Play `from -> to` and return the resulting position.
    ///
    /// Precondition: `to ∈ self.legal_moves(from)`. It is checked, so a move
    /// outside the legal set comes back as a `MoveError` instead of a
    /// corrupted position. The side to move is left unchanged; see
    /// [`Position::pass_turn`].
    pub fn apply_move(&self, from: Square, to: Square) -> Result<Position, MoveError> {
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySquare { from })?;
        if piece.color != self.side_to_move {
            return Err(MoveError::NotSideToMove {
                from,
                color: piece.color,
            });
        }
        if !self.legal_moves_from(from).contains(to) {
            return Err(MoveError::IllegalDestination { from, to });
        }
        Ok(self.apply_unchecked(Move::new(from, to)))
    }

    /// Apply a move already known to be legal.
    pub(crate) fn apply_unchecked(&self, mv: Move) -> Position {
        let mut next = *self;
        let Some(piece) = self.board.piece_at(mv.from) else {
            return next;
        };
        let kind = self.move_kind(mv);
        trace!("applying {mv} ({kind:?}) for {}", piece.color);

        if let MoveKind::Castle(side) = kind {
            let row = mv.from.row();
            next.board.relocate(
                Square(row, side.rook_col()),
                Square(row, side.rook_target_col()),
            );
        }

        next.board.relocate(mv.from, mv.to);

        match piece.kind {
            PieceKind::King => next.castling.remove_color(piece.color),
            PieceKind::Rook => {
                // Keyed on the origin column only, so a rook coming back to
                // its corner never restores a right.
                if let Some(side) = CastleSide::from_rook_col(mv.from.col()) {
                    next.castling.remove(piece.color, side);
                }
            }
            _ => {}
        }

        if kind == MoveKind::Promotion {
            next.board
                .set(mv.to, Piece::new(PieceKind::Queen, piece.color).into());
        }

        next
    }
}
