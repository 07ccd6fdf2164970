//! Property-based tests using proptest.

use crate::board::{Color, MoveKind, Position, Square, SquareSet};
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Positions visited by a seeded random game, the start included. Stops early
/// when the side to move has no legal move.
fn random_playout(seed: u64, num_moves: usize) -> Vec<Position> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut position = Position::initial();
    let mut visited = vec![position];

    for _ in 0..num_moves {
        let moves = position.legal_moves_for_color(position.side_to_move());
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        position = position
            .apply_move(mv.from, mv.to)
            .expect("generated move is legal")
            .pass_turn();
        visited.push(position);
    }

    visited
}

fn reaches(position: &Position, target: Square, by: Color) -> bool {
    position
        .board()
        .pieces_of(by)
        .any(|(from, _)| position.pseudo_moves(from, true).contains(target))
}

proptest! {
    /// Property: in_check agrees with the opponents' skip-castling move sets
    #[test]
    fn prop_in_check_matches_pseudo_moves(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for position in random_playout(seed, num_moves) {
            for color in Color::BOTH {
                let king = position.king_square(color).expect("kings are never captured");
                prop_assert_eq!(
                    position.in_check(color),
                    reaches(&position, king, color.opponent())
                );
            }
        }
    }

    /// Property: legal moves never leave the mover's king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in 0..15usize) {
        let visited = random_playout(seed, num_moves);
        let position = visited.last().copied().unwrap_or_default();
        let color = position.side_to_move();

        for mv in position.legal_moves_for_color(color) {
            let next = position.apply_move(mv.from, mv.to).expect("legal");
            prop_assert!(!next.in_check(color), "{} left the king in check", mv);
        }
    }

    /// Property: classification is a pure function of the position
    #[test]
    fn prop_classify_idempotent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for position in random_playout(seed, num_moves) {
            let first = position.classify();
            prop_assert_eq!(position.classify(), first);
            prop_assert_eq!(position.classify_for(first.color), first);
        }
    }

    /// Property: an ordinary move only moves one piece
    #[test]
    fn prop_normal_move_round_trip(seed in seed_strategy(), num_moves in 0..20usize) {
        let visited = random_playout(seed, num_moves);
        let position = visited.last().copied().unwrap_or_default();

        for mv in position.legal_moves_for_color(position.side_to_move()) {
            if position.move_kind(mv) != MoveKind::Normal {
                continue;
            }
            let next = position.apply_move(mv.from, mv.to).expect("legal");
            prop_assert_eq!(next.piece_at(mv.to), position.piece_at(mv.from));
            prop_assert!(next.piece_at(mv.from).is_none());
            for sq in Square::all().filter(|&sq| sq != mv.from && sq != mv.to) {
                prop_assert_eq!(next.piece_at(sq), position.piece_at(sq));
            }
        }
    }

    /// Property: castling rights are only ever removed
    #[test]
    fn prop_castling_rights_monotonic(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let visited = random_playout(seed, num_moves);
        for pair in visited.windows(2) {
            let before = pair[0].castling_rights().as_u8();
            let after = pair[1].castling_rights().as_u8();
            prop_assert_eq!(after & !before, 0);
        }
    }

    /// Property: material never grows beyond the 32 starting pieces
    #[test]
    fn prop_piece_count_never_grows(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let visited = random_playout(seed, num_moves);
        for pair in visited.windows(2) {
            prop_assert!(pair[1].board().pieces().count() <= pair[0].board().pieces().count());
        }
    }

    /// Property: square sets behave like sets of indices
    #[test]
    fn prop_square_set_membership(indices in proptest::collection::vec(0..64usize, 0..20)) {
        let set: SquareSet = indices.iter().map(|&i| Square::from_index(i)).collect();
        for i in 0..64 {
            prop_assert_eq!(set.contains(Square::from_index(i)), indices.contains(&i));
        }
        let mut unique = indices.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(set.len(), unique.len());
    }
}
