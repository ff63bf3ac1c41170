//! Perft breakdown runner.
//!
//! Usage:
//! `cargo run --release --bin perft_report`
//! `cargo run --release --bin perft_report -- --depth 5`
//! `cargo run --release --bin perft_report -- --depth 3 --fen "8/8/1k6/2b5/2pP4/8/5K2/8 b - d3 0 1" --divide`

use std::time::Instant;

use tile_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use tile_chess::move_generation::legal_move_generator::LegalMoveGenerator;
use tile_chess::move_generation::perft::{perft_divide, perft_multi_threaded};
use tile_chess::utils::long_algebraic::move_to_long_algebraic;
use tile_chess::utils::render_game_state::render_game_state;
use tile_chess::{Board, ChessErrors};

fn parse_arg_u8(flag: &str, default: u8) -> u8 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u8>() {
                return v.max(1);
            }
        }
    }
    default
}

fn parse_arg_string(flag: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

fn has_flag(flag: &str) -> bool {
    std::env::args().any(|arg| arg == flag)
}

fn main() -> Result<(), ChessErrors> {
    let depth = parse_arg_u8("--depth", 4);
    let fen = parse_arg_string("--fen").unwrap_or_else(|| STARTING_POSITION_FEN.to_owned());
    let board = Board::from_fen(&fen)?;

    println!("{}\n", render_game_state(&board));

    if has_flag("--divide") {
        let divided = perft_divide(&board, depth)?;
        let mut total = 0u64;
        for (mv, nodes) in &divided {
            println!("{}: {nodes}", move_to_long_algebraic(mv)?);
            total += nodes;
        }
        println!("\nmoves={} nodes={total}", divided.len());
        return Ok(());
    }

    let started = Instant::now();
    let counts = perft_multi_threaded(&LegalMoveGenerator, &board, depth)?;
    let elapsed = started.elapsed();
    let nps = counts.nodes as f64 / elapsed.as_secs_f64().max(1e-9);

    println!(
        "depth={depth} nodes={} captures={} en_passant={} castles={} promotions={} checks={} checkmates={}",
        counts.nodes,
        counts.captures,
        counts.en_passant,
        counts.castles,
        counts.promotions,
        counts.checks,
        counts.checkmates
    );
    println!("elapsed_ms={} nps={nps:.0}", elapsed.as_millis());
    Ok(())
}
