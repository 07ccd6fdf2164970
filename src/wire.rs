//! Move payloads as they travel between players.
//!
//! Coordinates are raw `(row, col)` pairs, row 0 being Black's home rank, so
//! a payload read off the network has to be range-checked before it becomes
//! a [`Move`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Move, Square, SquareError};

/// A board coordinate as sent by a client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl From<Square> for Coord {
    fn from(sq: Square) -> Self {
        Coord {
            row: sq.row(),
            col: sq.col(),
        }
    }
}

impl TryFrom<Coord> for Square {
    type Error = SquareError;

    fn try_from(coord: Coord) -> Result<Self, Self::Error> {
        Square::try_from((coord.row, coord.col))
    }
}

/// `{ "from": { "row": 6, "col": 4 }, "to": { "row": 4, "col": 4 } }`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MovePayload {
    pub from: Coord,
    pub to: Coord,
}

impl TryFrom<MovePayload> for Move {
    type Error = SquareError;

    fn try_from(payload: MovePayload) -> Result<Self, Self::Error> {
        Ok(Move::new(payload.from.try_into()?, payload.to.try_into()?))
    }
}

impl TryFrom<&MovePayload> for Move {
    type Error = SquareError;

    fn try_from(payload: &MovePayload) -> Result<Self, Self::Error> {
        Move::try_from(*payload)
    }
}

impl From<Move> for MovePayload {
    fn from(mv: Move) -> Self {
        MovePayload {
            from: mv.from.into(),
            to: mv.to.into(),
        }
    }
}
