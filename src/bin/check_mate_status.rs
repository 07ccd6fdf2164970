use std::env;
use std::error::Error;
use std::process;

use chess_rules::board::{GameStatus, Move, Position};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        process::exit(2);
    }

    let mut position = Position::initial();
    for arg in args.iter().skip(1) {
        let mv: Move = arg.parse()?;
        position = position.apply_move(mv.from, mv.to)?.pass_turn();
    }

    let side = position.side_to_move();
    let legal_moves = position.legal_moves_for_color(side);
    let status = position.classify().status;
    println!("side_to_move: {}", side.to_string().to_ascii_lowercase());
    println!("legal_moves: {}", legal_moves.len());
    println!("status: {status}");
    println!("checkmate: {}", status == GameStatus::Checkmate);
    println!("stalemate: {}", status == GameStatus::Stalemate);
    for mv in &legal_moves {
        println!("{mv}");
    }
    Ok(())
}
