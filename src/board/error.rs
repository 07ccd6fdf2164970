//! Error types for board operations.

use std::fmt;

use super::types::{Color, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColumnOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColumnOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for coordinate move parsing failures (`e2e4`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// A move rejected by `Position::apply_move`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// There is no piece on the source square
    EmptySquare { from: Square },
    /// The piece on the source square belongs to the side not on move
    NotSideToMove { from: Square, color: Color },
    /// The destination is not among the piece's legal moves
    IllegalDestination { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare { from } => write!(f, "No piece on {from}"),
            MoveError::NotSideToMove { from, color } => {
                write!(f, "Piece on {from} belongs to {color}, who is not on move")
            }
            MoveError::IllegalDestination { from, to } => {
                write!(f, "Illegal move {from}{to}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for diagram-based position construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// Diagram must have exactly 8 rows
    BadRowCount { found: usize },
    /// Each row must describe exactly 8 squares
    BadRowLength { row: usize, len: usize },
    /// Unknown piece letter
    InvalidPiece { row: usize, char: char },
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderError::BadRowCount { found } => {
                write!(f, "Diagram must have 8 rows, found {found}")
            }
            BuilderError::BadRowLength { row, len } => {
                write!(f, "Row {row} must have 8 squares, found {len}")
            }
            BuilderError::InvalidPiece { row, char } => {
                write!(f, "Invalid piece character '{char}' in row {row}")
            }
        }
    }
}

impl std::error::Error for BuilderError {}
