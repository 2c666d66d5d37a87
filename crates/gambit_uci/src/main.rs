//! UCI adapter: translates the line protocol into core calls.
//!
//! Everything protocol-visible goes to stdout; diagnostics go to stderr
//! so controllers never see them.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use gambit_core::{move_to_uci, set_position_from_uci, Engine, Position, SearchLimits};
use gambit_engine::AlphaBetaEngine;

const DEFAULT_DEPTH: u8 = 3;
const DEFAULT_MOVE_TIME: Duration = Duration::from_secs(5);

/// Extracts `depth` and `movetime` from a `go` command body; unknown
/// tokens are ignored.
fn parse_go(args: &[&str]) -> SearchLimits {
    let mut depth = DEFAULT_DEPTH;
    let mut move_time = DEFAULT_MOVE_TIME;

    let mut it = args.iter();
    while let Some(&tok) = it.next() {
        match tok {
            "depth" => {
                if let Some(d) = it.next().and_then(|v| v.parse().ok()) {
                    depth = d;
                }
            }
            "movetime" => {
                if let Some(ms) = it.next().and_then(|v| v.parse().ok()) {
                    move_time = Duration::from_millis(ms);
                }
            }
            _ => {}
        }
    }

    SearchLimits::depth_and_time(depth, move_time)
}

fn main() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut pos = Position::startpos();
    let mut engine = AlphaBetaEngine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "uci" => {
                writeln!(stdout, "id name {}", engine.name()).ok();
                writeln!(stdout, "id author {}", engine.author()).ok();
                writeln!(stdout, "uciok").ok();
                stdout.flush().ok();
            }
            "isready" => {
                writeln!(stdout, "readyok").ok();
                stdout.flush().ok();
            }
            "ucinewgame" => {
                pos = Position::startpos();
                engine.new_game();
            }
            "position" => {
                // A malformed FEN aborts setup and keeps the old position.
                if let Err(err) = set_position_from_uci(&mut pos, &parts[1..]) {
                    eprintln!("rejected position command: {err}");
                }
            }
            "go" => {
                let limits = parse_go(&parts[1..]);
                let report = engine.search(&pos, &limits);
                writeln!(
                    stdout,
                    "info depth {} score cp {} nodes {}",
                    report.depth, report.score, report.nodes
                )
                .ok();
                match report.best_move {
                    Some(mv) => writeln!(stdout, "bestmove {}", move_to_uci(mv)).ok(),
                    // Terminal position: mate or stalemate, nothing to play.
                    None => writeln!(stdout, "bestmove 0000").ok(),
                };
                stdout.flush().ok();
            }
            "quit" => break,
            _ => {
                // ignore unknown commands, as the protocol requires
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_go_defaults() {
        let limits = parse_go(&[]);
        assert_eq!(limits.depth, DEFAULT_DEPTH);
        assert_eq!(limits.move_time, Some(DEFAULT_MOVE_TIME));
    }

    #[test]
    fn test_parse_go_depth_and_movetime() {
        let limits = parse_go(&["depth", "6", "movetime", "1500"]);
        assert_eq!(limits.depth, 6);
        assert_eq!(limits.move_time, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_parse_go_ignores_junk() {
        let limits = parse_go(&["wtime", "30000", "depth", "2"]);
        assert_eq!(limits.depth, 2);
    }
}
