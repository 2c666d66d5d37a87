use crate::board::{Position, BISHOP_DIRS, KING_DELTAS, KNIGHT_DELTAS, ROOK_DIRS};
use crate::types::*;

/// Generate all legal moves, returning a freshly allocated vector.
/// Clones the position once and delegates to `legal_moves_into`.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across
/// calls. Filters pseudo-moves by playing each one on the mutable position
/// and rejecting those that leave the mover's own king attacked.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    out.retain(|&mv| {
        pos.make_move(mv);
        let exposes_king = pos.in_check(mover);
        pos.unmake_move().expect("make/unmake are paired");
        !exposes_king
    });
}

/// Geometrically valid moves for the side to move, ignoring king safety.
/// No castling move is ever produced; castling rights are carried state
/// only.
pub fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    for from in 0..64u8 {
        let pc = match pos.piece_at(from) {
            Some(p) => p,
            None => continue,
        };
        if pc.color != pos.side_to_move {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, pc.color, out),
            PieceKind::Knight => gen_jumps(pos, from, pc.color, &KNIGHT_DELTAS, out),
            PieceKind::King => gen_jumps(pos, from, pc.color, &KING_DELTAS, out),
            PieceKind::Bishop => gen_slides(pos, from, pc.color, &BISHOP_DIRS, out),
            PieceKind::Rook => gen_slides(pos, from, pc.color, &ROOK_DIRS, out),
            PieceKind::Queen => {
                gen_slides(pos, from, pc.color, &BISHOP_DIRS, out);
                gen_slides(pos, from, pc.color, &ROOK_DIRS, out);
            }
        }
    }
}

/// Pushes a pawn arrival, expanding into all four promotion kinds on the
/// last rank.
fn push_pawn(from: u8, to: u8, promo_rank: i8, out: &mut Vec<Move>) {
    if rank_of(to) == promo_rank {
        for kind in [
            PieceKind::Queen,
            PieceKind::Rook,
            PieceKind::Bishop,
            PieceKind::Knight,
        ] {
            out.push(Move::promotion(from, to, kind));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);

    let (dir, start_rank, promo_rank): (i8, i8, i8) = match c {
        Color::White => (1, 1, 7),
        Color::Black => (-1, 6, 0),
    };

    // Single push onto an empty square; double push only from the start
    // rank and only through an empty square.
    if let Some(to) = sq(f, r + dir) {
        if pos.piece_at(to).is_none() {
            push_pawn(from, to, promo_rank, out);
            if r == start_rank {
                if let Some(to2) = sq(f, r + 2 * dir) {
                    if pos.piece_at(to2).is_none() {
                        out.push(Move::new(from, to2));
                    }
                }
            }
        }
    }

    // Diagonal captures, onto an enemy piece or the en-passant target.
    for df in [-1i8, 1] {
        if let Some(to) = sq(f + df, r + dir) {
            match pos.piece_at(to) {
                Some(tpc) if tpc.color != c => push_pawn(from, to, promo_rank, out),
                Some(_) => {}
                None => {
                    if pos.en_passant == Some(to) {
                        out.push(Move::en_passant(from, to));
                    }
                }
            }
        }
    }
}

/// Fixed-offset movers (knight, king): empty squares and captures.
fn gen_jumps(pos: &Position, from: u8, c: Color, deltas: &[(i8, i8); 8], out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    for &(df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(tpc) if tpc.color != c => out.push(Move::new(from, to)),
                Some(_) => {}
            }
        }
    }
}

/// Sliding movers: walk each ray until the first occupied square, which is
/// included as a capture when it holds an enemy piece.
fn gen_slides(pos: &Position, from: u8, c: Color, dirs: &[(i8, i8); 4], out: &mut Vec<Move>) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for &(df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(tpc) if tpc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                Some(_) => break,
            }
            f += df;
            r += dr;
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
