mod kings;
mod knights;
mod pawns;
mod sliders;

use once_cell::sync::Lazy;

use super::{Color, Move, PieceKind, Position, Square, SquareSet};

use sliders::SliderType;

/// Squares reachable from each square by a (leaper) offset pattern.
fn leaper_table(deltas: &[(isize, isize)]) -> [SquareSet; 64] {
    let mut table = [SquareSet::EMPTY; 64];
    for (idx, slot) in table.iter_mut().enumerate() {
        let from = Square::from_index(idx);
        *slot = deltas
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .collect();
    }
    table
}

pub(crate) static KNIGHT_TARGETS: Lazy<[SquareSet; 64]> = Lazy::new(|| {
    leaper_table(&[
        (-2, -1),
        (-2, 1),
        (-1, -2),
        (-1, 2),
        (1, -2),
        (1, 2),
        (2, -1),
        (2, 1),
    ])
});

pub(crate) static KING_TARGETS: Lazy<[SquareSet; 64]> = Lazy::new(|| {
    leaper_table(&[
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ])
});

impl Position {
    /// Destinations allowed by the piece's movement pattern and board
    /// occupancy, ignoring self-check.
    ///
    /// `skip_castling` drops castling destinations; attack detection needs
    /// that, since castling legality itself asks whether squares are attacked.
    #[must_use]
    pub fn pseudo_moves(&self, from: Square, skip_castling: bool) -> SquareSet {
        let Some(piece) = self.board.piece_at(from) else {
            return SquareSet::EMPTY;
        };
        let color = piece.color;
        match piece.kind {
            PieceKind::Pawn => self.pawn_moves(from, color),
            PieceKind::Knight => self.knight_moves(from, color),
            PieceKind::Bishop => self.slider_moves(from, color, SliderType::Bishop),
            PieceKind::Rook => self.slider_moves(from, color, SliderType::Rook),
            PieceKind::Queen => self.slider_moves(from, color, SliderType::Queen),
            PieceKind::King => self.king_moves(from, color, skip_castling),
        }
    }

    /// Legal destinations for the piece on `from`.
    ///
    /// Empty when the square is empty or holds a piece of the side not on
    /// move.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> SquareSet {
        match self.board.piece_at(from) {
            Some(piece) if piece.color == self.side_to_move => self.legal_moves_from(from),
            _ => SquareSet::EMPTY,
        }
    }

    /// Legal destinations for whatever stands on `from`, regardless of whose
    /// turn it is.
    pub(crate) fn legal_moves_from(&self, from: Square) -> SquareSet {
        let Some(piece) = self.board.piece_at(from) else {
            return SquareSet::EMPTY;
        };
        self.pseudo_moves(from, false)
            .iter()
            .filter(|&to| !self.leaves_king_attacked(from, to, piece.color))
            .collect()
    }

    /// Simulate `from -> to` on a scratch copy of the board and report whether
    /// `color`'s king is attacked afterwards.
    ///
    /// Only placement matters here: no rights revocation, no rook
    /// co-relocation, no promotion. For castling this checks the king's
    /// landing square; transit squares were checked during generation.
    fn leaves_king_attacked(&self, from: Square, to: Square, color: Color) -> bool {
        let mut scratch = *self;
        scratch.board.relocate(from, to);
        scratch.in_check(color)
    }

    /// Every legal move available to `color`, in square order.
    #[must_use]
    pub fn legal_moves_for_color(&self, color: Color) -> Vec<Move> {
        self.board
            .pieces_of(color)
            .flat_map(|(from, _)| {
                self.legal_moves_from(from)
                    .iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// True if any piece of `color` has at least one legal move.
    #[must_use]
    pub fn has_legal_moves(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .any(|(from, _)| !self.legal_moves_from(from).is_empty())
    }

    /// Sum of legal destinations over all pieces of `color`.
    #[must_use]
    pub fn count_legal_moves(&self, color: Color) -> usize {
        self.board
            .pieces_of(color)
            .map(|(from, _)| self.legal_moves_from(from).len())
            .sum()
    }
}
