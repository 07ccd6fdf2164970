//! Leaf-node counting over the legal move tree.

use crate::board::{Move, Position};

/// Number of leaf nodes `depth` plies below `position`, the side to move
/// alternating between plies.
pub fn perft(position: &Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = position.legal_moves_for_color(position.side_to_move());
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        let next = position.apply_unchecked(mv).pass_turn();
        nodes += perft(&next, depth - 1);
    }

    nodes
}

/// Per-move breakdown of [`perft`] at the root.
pub fn divide(position: &Position, depth: usize) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    position
        .legal_moves_for_color(position.side_to_move())
        .into_iter()
        .map(|mv| {
            let next = position.apply_unchecked(mv).pass_turn();
            (mv, perft(&next, depth - 1))
        })
        .collect()
}
