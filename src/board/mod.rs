//! Board representation and chess rules.
//!
//! A `Position` is a plain 8x8 grid of cells plus castling rights and the
//! side to move. Move generation, attack detection, move application and
//! status classification are all methods on `Position`.
//!
//! # Example
//! ```
//! use chess_rules::board::{GameStatus, Position, Square};
//!
//! let position = Position::initial();
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//! assert!(position.legal_moves(e2).contains(e4));
//!
//! let next = position.apply_move(e2, e4).unwrap().pass_turn();
//! assert_eq!(next.classify().status, GameStatus::Ongoing);
//! ```

mod apply;
mod attacks;
mod builder;
mod error;
mod movegen;
pub mod prelude;
mod render;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{BuilderError, MoveError, MoveParseError, SquareError};
pub use render::RenderStyle;
pub use state::{Board, Position};
pub use status::{Classification, GameStatus};
pub use types::{
    CastleSide, CastlingRights, Cell, Color, Move, MoveKind, Piece, PieceKind, Square, SquareSet,
    SquareSetIter,
};
