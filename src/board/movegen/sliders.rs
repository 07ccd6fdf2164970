use super::super::{Color, Position, Square, SquareSet};

const ORTHOGONAL: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [(isize, isize)] {
        const BOTH: [(isize, isize); 8] = [
            ORTHOGONAL[0],
            ORTHOGONAL[1],
            ORTHOGONAL[2],
            ORTHOGONAL[3],
            DIAGONAL[0],
            DIAGONAL[1],
            DIAGONAL[2],
            DIAGONAL[3],
        ];
        match self {
            SliderType::Bishop => &DIAGONAL,
            SliderType::Rook => &ORTHOGONAL,
            SliderType::Queen => &BOTH,
        }
    }
}

impl Position {
    /// Walk each ray until the first occupied square, which is included only
    /// when it holds an enemy piece.
    pub(crate) fn slider_moves(&self, from: Square, color: Color, slider: SliderType) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        for &(dr, dc) in slider.directions() {
            let mut cursor = from.offset(dr, dc);
            while let Some(sq) = cursor {
                match self.board.get(sq).color() {
                    None => moves.insert(sq),
                    Some(occupant) => {
                        if occupant != color {
                            moves.insert(sq);
                        }
                        break;
                    }
                }
                cursor = sq.offset(dr, dc);
            }
        }
        moves
    }
}
