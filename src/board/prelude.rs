//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let position = Position::initial();
//! assert_eq!(position.side_to_move(), Color::White);
//! ```

pub use super::{
    CastleSide, CastlingRights, Cell, Classification, Color, GameStatus, Move, MoveError,
    MoveKind, Piece, PieceKind, Position, PositionBuilder, Square, SquareSet,
};
