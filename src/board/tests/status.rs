//! Check, checkmate and stalemate classification.

use super::{diagram, play, sq};
use crate::board::{Classification, Color, GameStatus, PieceKind, Position, PositionBuilder};

fn fools_mate() -> Position {
    ["f2f3", "e7e5", "g2g4", "d8h4"]
        .iter()
        .fold(Position::initial(), |position, mv| play(&position, mv))
}

#[test]
fn test_initial_position_is_ongoing() {
    let position = Position::initial();
    assert_eq!(
        position.classify(),
        Classification {
            status: GameStatus::Ongoing,
            color: Color::White
        }
    );
    assert!(!position.is_checkmate());
    assert!(!position.is_stalemate());
}

#[test]
fn test_back_rank_mate_is_checkmate_not_check() {
    let position = diagram([
        "R.....k.", ".....ppp", "........", "........", "........", "........", "........",
        "....K...",
    ])
    .side_to_move(Color::Black)
    .build();

    assert!(position.in_check(Color::Black));
    let classification = position.classify();
    assert_eq!(classification.status, GameStatus::Checkmate);
    assert_eq!(classification.color, Color::Black);
    assert!(position.is_checkmate());
    assert!(classification.status.is_terminal());
}

#[test]
fn test_escapable_check_is_check() {
    let position = diagram([
        "....k...", "........", "........", "........", "....R...", "........", "........",
        "K.......",
    ])
    .side_to_move(Color::Black)
    .build();

    assert_eq!(position.classify().status, GameStatus::Check);
    assert!(!GameStatus::Check.is_terminal());
}

#[test]
fn test_lone_king_stalemate() {
    let position = diagram([
        ".......k", ".....Q..", "......K.", "........", "........", "........", "........",
        "........",
    ])
    .side_to_move(Color::Black)
    .build();

    assert!(!position.in_check(Color::Black));
    assert!(!position.has_legal_moves(Color::Black));
    assert_eq!(position.classify().status, GameStatus::Stalemate);
    assert!(position.is_stalemate());
    assert!(!position.is_checkmate());

    // The same board is an ordinary position for White.
    assert_eq!(
        position.classify_for(Color::White).status,
        GameStatus::Ongoing
    );
}

#[test]
fn test_fools_mate() {
    let position = fools_mate();
    assert_eq!(position.side_to_move(), Color::White);
    assert_eq!(
        position.classify(),
        Classification {
            status: GameStatus::Checkmate,
            color: Color::White
        }
    );
    assert_eq!(position.attackers_of(sq("e1"), Color::Black), vec![sq("h4")]);
}

#[test]
fn test_classify_is_idempotent() {
    for position in [Position::initial(), fools_mate()] {
        let first = position.classify();
        assert_eq!(position.classify(), first);
        assert_eq!(position.classify(), first);
    }
}

#[test]
fn test_missing_king_does_not_panic() {
    let position = PositionBuilder::new()
        .piece(sq("d4"), Color::White, PieceKind::Queen)
        .piece(sq("a2"), Color::White, PieceKind::Pawn)
        .build();

    assert_eq!(position.classify().status, GameStatus::Ongoing);
    // No pieces at all: nothing to move, nothing to attack.
    assert_eq!(
        position.classify_for(Color::Black).status,
        GameStatus::Stalemate
    );
}

#[test]
fn test_display() {
    assert_eq!(GameStatus::Checkmate.to_string(), "checkmate");
    assert_eq!(
        fools_mate().classify().to_string(),
        "checkmate (White to move)"
    );
}
