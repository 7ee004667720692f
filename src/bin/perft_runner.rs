//! Batch perft diagnostic runner.
//!
//! Usage:
//! `cargo run --release --bin perft_runner`
//! `cargo run --release --bin perft_runner -- --depth 5`
//! `cargo run --release --bin perft_runner -- --fen "<fen>" --depth 4 --divide`
//!
//! Runs perft at every depth up to `--depth`, printing node counts with
//! elapsed time and throughput; `--divide` additionally dumps the per-move
//! breakdown at the target depth for comparison against reference tables.

use std::time::Instant;

use quince_chess::board::chess_rules::STARTING_POSITION_FEN;
use quince_chess::board::position::Position;
use quince_chess::move_generation::perft::{perft, perft_divide};

fn parse_arg_u8(flag: &str, default: u8) -> u8 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(value) = args[i + 1].parse::<u8>() {
                return value.max(1);
            }
        }
    }
    default
}

fn parse_arg_string(flag: &str, default: &str) -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    default.to_owned()
}

fn has_flag(flag: &str) -> bool {
    std::env::args().any(|arg| arg == flag)
}

fn main() -> Result<(), String> {
    let depth = parse_arg_u8("--depth", 4);
    let fen = parse_arg_string("--fen", STARTING_POSITION_FEN);

    let mut position = Position::from_fen(&fen).map_err(|e| e.to_string())?;
    println!("fen: {fen}");

    for d in 1..=depth {
        let start = Instant::now();
        let nodes = perft(&mut position, d);
        let elapsed = start.elapsed();
        let nps = nodes as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
        println!(
            "depth {d:2}: {nodes:10} nodes in {:6}ms ({nps:.0} nodes/s)",
            elapsed.as_millis()
        );
    }

    if has_flag("--divide") {
        let report = perft_divide(&mut position, depth);
        println!();
        for entry in &report.moves {
            println!("{entry}");
        }
        println!("total: {}", report.nodes);
    }

    Ok(())
}
