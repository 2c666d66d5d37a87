//! UCI coordinate move text and `position` command support.
//!
//! Move text is `<from><to>` plus an optional promotion letter, e.g.
//! `e2e4` or `a7a8q`.

use crate::board::Position;
use crate::error::FenError;
use crate::movegen::legal_moves;
use crate::types::*;

pub fn move_to_uci(mv: Move) -> String {
    let mut s = String::new();
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(kind) = mv.promo {
        s.push(promo_char(kind));
    }
    s
}

fn promo_char(kind: PieceKind) -> char {
    match kind {
        PieceKind::Rook => 'r',
        PieceKind::Bishop => 'b',
        PieceKind::Knight => 'n',
        _ => 'q',
    }
}

fn promo_kind(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'q' => Some(PieceKind::Queen),
        'r' => Some(PieceKind::Rook),
        'b' => Some(PieceKind::Bishop),
        'n' => Some(PieceKind::Knight),
        _ => None,
    }
}

/// Pure coordinate parse with no legality knowledge.
pub fn decode_move_text(txt: &str) -> Option<(u8, u8, Option<PieceKind>)> {
    if !txt.is_ascii() {
        return None;
    }
    let from = coord_to_sq(txt.get(0..2)?)?;
    let to = coord_to_sq(txt.get(2..4)?)?;
    let promo = match txt.len() {
        4 => None,
        5 => Some(promo_kind(txt.as_bytes()[4] as char)?),
        _ => return None,
    };
    Some((from, to, promo))
}

/// Parses move text and matches it against the legal moves of `pos`, so
/// the returned move carries the correct flags. Promotion moves require
/// the promotion letter.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    let (from, to, promo) = decode_move_text(txt)?;
    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promo == promo)
}

/// Applies a UCI `position` command body: `startpos | fen <6 fields>`,
/// optionally followed by `moves <uci>...`.
///
/// A malformed FEN aborts setup and leaves `pos` untouched. Move tokens
/// are matched against the legal moves first; an unmatched token falls
/// back to a coordinate-trusted application (the generator has known
/// gaps, castling among them), skipping tokens whose from-square is
/// empty.
pub fn set_position_from_uci(pos: &mut Position, args: &[&str]) -> Result<(), FenError> {
    let mut i = 0;
    match args.first() {
        Some(&"fen") => {
            let end = args.iter().position(|&t| t == "moves").unwrap_or(args.len());
            let fen = args[1..end].join(" ");
            *pos = Position::from_fen(&fen)?;
            i = end;
        }
        Some(&"startpos") => {
            *pos = Position::startpos();
            i = 1;
        }
        _ => {
            *pos = Position::startpos();
        }
    }

    if args.get(i) == Some(&"moves") {
        for txt in &args[i + 1..] {
            match parse_uci_move(pos, txt) {
                Some(mv) => pos.make_move(mv),
                None => {
                    if let Some((from, to, promo)) = decode_move_text(txt) {
                        if pos.piece_at(from).is_some() {
                            let mut mv = Move::new(from, to);
                            mv.promo = promo;
                            pos.make_move(mv);
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
