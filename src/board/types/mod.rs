//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `PieceKind`, `Color`, `Piece` and `Cell` - square contents
//! - `Square` - (row, column) board coordinate
//! - `SquareSet` - 64-bit set of squares
//! - `Move` and `MoveKind` - move representation
//! - `CastlingRights` and `CastleSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;
mod square_set;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveKind};
pub use piece::{Cell, Color, Piece, PieceKind};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
