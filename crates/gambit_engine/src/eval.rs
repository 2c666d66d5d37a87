//! Static position evaluation: material plus piece-square bonuses.
//!
//! Scores are White-positive and independent of the side to move; the
//! search adjusts the sign for the mover at its leaves.

use gambit_core::{file_of, rank_of, Color, PieceKind, Position};

/// Pawn placement bonuses, written rank-8-first. Rewards advancing and
/// holding the center, penalises loitering in front of the castled-king
/// squares.
const PAWN_TABLE: [i32; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, //
    50, 50, 50, 50, 50, 50, 50, 50, //
    10, 10, 20, 30, 30, 20, 10, 10, //
    5, 5, 10, 25, 25, 10, 5, 5, //
    0, 0, 0, 20, 20, 0, 0, 0, //
    5, -5, -10, 0, 0, -10, -5, 5, //
    5, 10, 10, -20, -20, 10, 10, 5, //
    0, 0, 0, 0, 0, 0, 0, 0, //
];

/// Knight placement bonuses, written rank-8-first: centralisation is
/// everything, the rim is a liability.
const KNIGHT_TABLE: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50, //
    -40, -20, 0, 0, 0, 0, -20, -40, //
    -30, 0, 10, 15, 15, 10, 0, -30, //
    -30, 5, 15, 20, 20, 15, 5, -30, //
    -30, 0, 15, 20, 20, 15, 0, -30, //
    -30, 5, 10, 15, 15, 10, 5, -30, //
    -40, -20, 0, 5, 5, 0, -20, -40, //
    -50, -40, -30, -30, -30, -30, -40, -50, //
];

/// Material value of a piece in centipawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20_000,
    }
}

/// Evaluates the position: positive favors White.
///
/// Signed material for every piece, plus piece-square bonuses for pawns
/// and knights only. The tables are written rank-8-first, so Black reads
/// them by square index directly and White through the vertical mirror
/// `(7 - rank) * 8 + file`. Bishops, rooks, queens and kings carry no
/// positional term.
pub fn evaluate(pos: &Position) -> i32 {
    let mut score = 0i32;

    for s in 0..64u8 {
        let pc = match pos.piece_at(s) {
            Some(p) => p,
            None => continue,
        };
        let sign = match pc.color {
            Color::White => 1,
            Color::Black => -1,
        };
        score += sign * piece_value(pc.kind);

        let table = match pc.kind {
            PieceKind::Pawn => &PAWN_TABLE,
            PieceKind::Knight => &KNIGHT_TABLE,
            _ => continue,
        };
        let idx = match pc.color {
            Color::White => ((7 - rank_of(s)) * 8 + file_of(s)) as usize,
            Color::Black => s as usize,
        };
        score += sign * table[idx];
    }

    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
