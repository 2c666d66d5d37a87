//! Terminal play loop: the human plays White, the engine answers.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use gambit_core::{
    legal_moves, move_to_uci, parse_uci_move, Color, Engine, Position, SearchLimits,
};
use gambit_engine::AlphaBetaEngine;

#[derive(Parser, Debug)]
#[command(name = "gambit-cli", about = "Play against the Gambit engine in a terminal")]
struct Args {
    /// Engine search depth in plies
    #[arg(long, default_value_t = 3)]
    depth: u8,

    /// Engine move-time budget in milliseconds
    #[arg(long, default_value_t = 2000)]
    movetime_ms: u64,

    /// Start from this FEN instead of the standard position
    #[arg(long)]
    fen: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut pos = match &args.fen {
        Some(fen) => Position::from_fen(fen).context("rejected start FEN")?,
        None => Position::startpos(),
    };
    let limits = SearchLimits::depth_and_time(args.depth, Duration::from_millis(args.movetime_ms));
    let mut engine = AlphaBetaEngine::new();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        println!("\n{}", pos.render_ascii());

        let moves = legal_moves(&pos);
        if moves.is_empty() {
            // Only the caller can tell mate from stalemate.
            if pos.in_check(pos.side_to_move) {
                let winner = match pos.side_to_move {
                    Color::White => "the engine",
                    Color::Black => "you",
                };
                println!("Checkmate! Winner: {winner}.");
            } else {
                println!("Stalemate.");
            }
            break;
        }

        if pos.side_to_move == Color::White {
            print!("Your move (e.g. e2e4, or quit): ");
            stdout.flush().ok();

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            if input == "quit" {
                break;
            }

            match parse_uci_move(&pos, input) {
                Some(mv) => pos.make_move(mv),
                None => {
                    let sample: Vec<String> =
                        moves.iter().take(5).map(|&m| move_to_uci(m)).collect();
                    println!("Illegal move. Try one of: {} ...", sample.join(" "));
                }
            }
        } else {
            println!("Engine thinking...");
            let report = engine.search(&pos, &limits);
            match report.best_move {
                Some(mv) => {
                    println!(
                        "Engine plays {} (score {} cp at depth {})",
                        move_to_uci(mv),
                        report.score,
                        report.depth
                    );
                    pos.make_move(mv);
                }
                None => break,
            }
        }
    }

    Ok(())
}
