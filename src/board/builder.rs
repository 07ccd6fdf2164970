//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece, or from an 8-row letter diagram
//! (row 0 first, uppercase White, lowercase Black, `.` empty).
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, PieceKind, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square(7, 4), Color::White, PieceKind::King)
//!     .piece(Square(0, 4), Color::Black, PieceKind::King)
//!     .piece(Square(6, 0), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(position.board().pieces().count(), 3);
//! ```

use super::{
    Board, BuilderError, CastleSide, CastlingRights, Cell, Color, Piece, PieceKind, Position,
    Square,
};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty board builder: no pieces, White to move, no rights.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            board: Board::standard(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
        }
    }

    /// Create a builder from a letter diagram, one string per row starting
    /// with row 0 (Black's home rank). Spaces inside a row are ignored.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BuilderError> {
        if rows.len() != 8 {
            return Err(BuilderError::BadRowCount { found: rows.len() });
        }

        let mut builder = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != 8 {
                return Err(BuilderError::BadRowLength {
                    row,
                    len: cells.len(),
                });
            }
            for (col, &c) in cells.iter().enumerate() {
                if c == '.' {
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(BuilderError::InvalidPiece { row, char: c })?;
                builder.board.set(Square(row, col), piece.into());
            }
        }
        Ok(builder)
    }

    /// Place a piece on the board, replacing anything already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.board.set(square, Piece::new(kind, color).into());
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.set(square, Cell::Empty);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Grant one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.castling_rights.set(color, side);
        self
    }

    /// Enable all castling rights.
    #[must_use]
    pub const fn all_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::all();
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    #[must_use]
    pub fn build(self) -> Position {
        Position::from_parts(self.board, self.castling_rights, self.side_to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = PositionBuilder::starting_position().build();
        assert_eq!(built, Position::initial());
    }

    #[test]
    fn test_diagram_matches_initial() {
        let built = PositionBuilder::from_rows(&[
            "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
            "RNBQKBNR",
        ])
        .unwrap()
        .all_castling_rights()
        .build();
        assert_eq!(built, Position::initial());
    }

    #[test]
    fn test_diagram_errors() {
        assert_eq!(
            PositionBuilder::from_rows(&["........"]).unwrap_err(),
            BuilderError::BadRowCount { found: 1 }
        );

        let mut rows = ["........"; 8];
        rows[3] = ".......";
        assert_eq!(
            PositionBuilder::from_rows(&rows).unwrap_err(),
            BuilderError::BadRowLength { row: 3, len: 7 }
        );

        rows[3] = "...x....";
        assert_eq!(
            PositionBuilder::from_rows(&rows).unwrap_err(),
            BuilderError::InvalidPiece { row: 3, char: 'x' }
        );
    }

    #[test]
    fn test_castling_rights() {
        let position = PositionBuilder::starting_position()
            .no_castling_rights()
            .castle(Color::White, CastleSide::KingSide)
            .build();

        let rights = position.castling_rights();
        assert!(rights.has(Color::White, CastleSide::KingSide));
        assert!(!rights.has(Color::White, CastleSide::QueenSide));
        assert!(!rights.has_any(Color::Black));
    }

    #[test]
    fn test_clear_square() {
        let position = PositionBuilder::starting_position()
            .clear(Square(7, 0))
            .build();

        assert!(position.piece_at(Square(7, 0)).is_none());
        assert!(position.piece_at(Square(7, 1)).is_some());
    }
}
