#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastlingRights, Cell, Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 grid of cells, indexed `[row][col]`.
///
/// `Board` is `Copy`: legality checks simulate moves on a scratch copy and
/// never touch the position they were asked about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; 8]; 8],
        }
    }

    /// Standard starting arrangement
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.set(Square(0, col), Piece::new(kind, Color::Black).into());
            board.set(Square(1, col), Piece::new(PieceKind::Pawn, Color::Black).into());
            board.set(Square(6, col), Piece::new(PieceKind::Pawn, Color::White).into());
            board.set(Square(7, col), Piece::new(kind, Color::White).into());
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.0][sq.1]
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.0][sq.1] = cell;
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.get(sq).piece()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_empty()
    }

    /// Move whatever stands on `from` to `to`, leaving `from` empty.
    #[inline]
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        let cell = self.get(from);
        self.set(to, cell);
        self.set(from, Cell::Empty);
    }

    /// Every occupied square with its piece, in index order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Every square holding a piece of `color`
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Square of the first king of `color`, or `None` if it is off the board.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

/// Board, castling rights and side to move: the whole truth about a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) castling: CastlingRights,
    pub(crate) side_to_move: Color,
}

impl Position {
    /// Standard starting position, White to move, all castling rights.
    #[must_use]
    pub fn initial() -> Self {
        Position {
            board: Board::standard(),
            castling: CastlingRights::all(),
            side_to_move: Color::White,
        }
    }

    pub(crate) const fn from_parts(
        board: Board,
        castling: CastlingRights,
        side_to_move: Color,
    ) -> Self {
        Position {
            board,
            castling,
            side_to_move,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// Same placement with the other side on move.
    ///
    /// The applier never flips the turn itself; callers do it after
    /// recording the move.
    #[must_use]
    pub fn pass_turn(&self) -> Position {
        self.with_side_to_move(self.side_to_move.opponent())
    }

    #[must_use]
    pub fn with_side_to_move(&self, color: Color) -> Position {
        Position {
            side_to_move: color,
            ..*self
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::initial()
    }
}
