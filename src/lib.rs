pub mod board;
pub mod console;
pub mod game;
pub mod perft;
pub mod session;
pub mod wire;

pub use board::{Classification, Color, GameStatus, Move, Piece, PieceKind, Position, Square};
pub use game::{Game, GameError, Outcome};
pub use session::{GameId, SessionConfig, SessionRegistry};
