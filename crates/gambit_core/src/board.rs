use crate::error::{FenError, StateError};
use crate::types::*;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// Shared movement geometry, as (file, rank) deltas. Ray walking always
// recomputes 2-D coordinates per step; raw 1-D index arithmetic wraps at
// the board edge.
pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
pub(crate) const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn none() -> Self {
        Self {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }

    pub fn all() -> Self {
        Self {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }
}

/// Everything a single `make_move` changed, captured before mutation.
/// `unmake_move` pops one of these and restores the position atomically.
#[derive(Clone, Debug)]
struct Undo {
    mv: Move,
    moved: Piece,
    captured: Option<Piece>,
    /// Square the captured pawn actually stood on for en passant; it is
    /// not the move's destination square.
    ep_captured_sq: Option<u8>,
    castling: CastlingRights,
    en_passant: Option<u8>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

/// Mailbox board plus the full game-state fields of a FEN record.
///
/// The position owns a private LIFO history of undo records: every
/// `make_move` pushes one, every `unmake_move` pops one. Callers must pair
/// each make with exactly one unmake before returning past it.
#[derive(Clone, Debug)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    history: Vec<Undo>,
}

/// Observable state only; the undo history is bookkeeping, not identity.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.side_to_move == other.side_to_move
            && self.castling == other.castling
            && self.en_passant == other.en_passant
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
    }
}

impl Position {
    pub fn startpos() -> Self {
        let mut p = Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        };

        for f in 0..8 {
            p.board[8 + f] = Some(Piece {
                color: Color::White,
                kind: PieceKind::Pawn,
            });
            p.board[48 + f] = Some(Piece {
                color: Color::Black,
                kind: PieceKind::Pawn,
            });
        }
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece {
                color: Color::White,
                kind,
            });
            p.board[56 + f] = Some(Piece {
                color: Color::Black,
                kind,
            });
        }
        p
    }

    /// Parses a six-field FEN record. All six fields must be present; any
    /// malformed field rejects the whole string and nothing is built.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(FenError::FieldCount(parts.len()));
        }

        let board = parse_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };

        let mut castling = CastlingRights::none();
        if parts[2] != "-" {
            for ch in parts[2].chars() {
                match ch {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(FenError::Castling(parts[2].to_string())),
                }
            }
        }

        let en_passant = if parts[3] == "-" {
            None
        } else {
            Some(coord_to_sq(parts[3]).ok_or_else(|| FenError::EnPassant(parts[3].to_string()))?)
        };

        let halfmove_clock: u32 = parts[4]
            .parse()
            .map_err(|_| FenError::Clock(parts[4].to_string()))?;
        let fullmove_number: u32 = parts[5]
            .parse()
            .map_err(|_| FenError::Clock(parts[5].to_string()))?;

        Ok(Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            history: Vec::new(),
        })
    }

    /// Re-emits the position as a six-field FEN record.
    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.board[(rank * 8 + file) as usize] {
                    None => empty += 1,
                    Some(pc) => {
                        if empty > 0 {
                            placement.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        placement.push(pc.to_fen_char());
                    }
                }
            }
            if empty > 0 {
                placement.push(char::from(b'0' + empty));
            }
            if rank > 0 {
                placement.push('/');
            }
        }

        let side = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };

        let mut rights = String::new();
        if self.castling.wk {
            rights.push('K');
        }
        if self.castling.wq {
            rights.push('Q');
        }
        if self.castling.bk {
            rights.push('k');
        }
        if self.castling.bq {
            rights.push('q');
        }
        if rights.is_empty() {
            rights.push('-');
        }

        let ep = match self.en_passant {
            Some(s) => sq_to_coord(s),
            None => "-".to_string(),
        };

        format!(
            "{} {} {} {} {} {}",
            placement, side, rights, ep, self.halfmove_clock, self.fullmove_number
        )
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }

    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        for i in 0..64 {
            if let Some(pc) = self.board[i] {
                if pc.color == c && pc.kind == PieceKind::King {
                    return Some(i as u8);
                }
            }
        }
        None
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    /// True if any piece of `by` attacks `target` on the current board.
    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);

        // A pawn of `by` attacks `target` from one diagonal step on the
        // rank it advances from.
        let pawn_rank_step: i8 = match by {
            Color::White => -1,
            Color::Black => 1,
        };
        for df in [-1i8, 1] {
            if let Some(s) = sq(tf + df, tr + pawn_rank_step) {
                if self.holds(s, by, PieceKind::Pawn) {
                    return true;
                }
            }
        }

        for (df, dr) in KNIGHT_DELTAS {
            if let Some(s) = sq(tf + df, tr + dr) {
                if self.holds(s, by, PieceKind::Knight) {
                    return true;
                }
            }
        }

        for (df, dr) in KING_DELTAS {
            if let Some(s) = sq(tf + df, tr + dr) {
                if self.holds(s, by, PieceKind::King) {
                    return true;
                }
            }
        }

        self.ray_attacked(tf, tr, by, &BISHOP_DIRS, PieceKind::Bishop)
            || self.ray_attacked(tf, tr, by, &ROOK_DIRS, PieceKind::Rook)
    }

    fn holds(&self, s: u8, color: Color, kind: PieceKind) -> bool {
        matches!(self.piece_at(s), Some(pc) if pc.color == color && pc.kind == kind)
    }

    /// Walks each ray until the first occupied square; only `slider` or a
    /// queen of `by` sitting there counts as an attacker.
    fn ray_attacked(
        &self,
        tf: i8,
        tr: i8,
        by: Color,
        dirs: &[(i8, i8); 4],
        slider: PieceKind,
    ) -> bool {
        for &(df, dr) in dirs {
            let mut f = tf + df;
            let mut r = tr + dr;
            while let Some(s) = sq(f, r) {
                if let Some(pc) = self.piece_at(s) {
                    if pc.color == by && (pc.kind == slider || pc.kind == PieceKind::Queen) {
                        return true;
                    }
                    break;
                }
                f += df;
                r += dr;
            }
        }
        false
    }

    /// Applies `mv` and pushes an undo record.
    ///
    /// Defined only for moves drawn from `legal_moves` on the current
    /// position; an unvalidated externally supplied move is the caller's
    /// risk. Castling rights and the halfmove/fullmove clocks are carried,
    /// restored on unmake, but never advanced here.
    pub fn make_move(&mut self, mv: Move) {
        let moved = self.piece_at(mv.from).expect("no piece on from-square");
        let mut captured = self.piece_at(mv.to);
        let mut ep_captured_sq = None;

        let undo = Undo {
            mv,
            moved,
            captured: None, // patched below once en passant is resolved
            ep_captured_sq: None,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        };

        if mv.is_en_passant {
            // The captured pawn is one rank behind the destination square.
            let back: i8 = match moved.color {
                Color::White => -1,
                Color::Black => 1,
            };
            if let Some(cs) = sq(file_of(mv.to), rank_of(mv.to) + back) {
                captured = self.piece_at(cs);
                self.set_piece(cs, None);
                ep_captured_sq = Some(cs);
            }
        }

        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(moved));

        if let Some(kind) = mv.promo {
            if moved.kind == PieceKind::Pawn {
                self.set_piece(
                    mv.to,
                    Some(Piece {
                        color: moved.color,
                        kind,
                    }),
                );
            }
        }

        // The en-passant target exists for exactly one ply after a
        // two-square pawn push.
        self.en_passant = None;
        if moved.kind == PieceKind::Pawn {
            let fr = rank_of(mv.from);
            let tr = rank_of(mv.to);
            if (fr - tr).abs() == 2 {
                self.en_passant = sq(file_of(mv.from), (fr + tr) / 2);
            }
        }

        self.side_to_move = self.side_to_move.other();

        self.history.push(Undo {
            captured,
            ep_captured_sq,
            ..undo
        });
    }

    /// Pops the most recent undo record and restores every field.
    /// Fails with `StateError::EmptyHistory` when nothing was made.
    pub fn unmake_move(&mut self) -> Result<(), StateError> {
        let undo = self.history.pop().ok_or(StateError::EmptyHistory)?;

        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        let mv = undo.mv;
        // Putting the recorded piece back also reverts a promotion.
        self.set_piece(mv.to, None);
        self.set_piece(mv.from, Some(undo.moved));

        if mv.is_en_passant {
            if let Some(cs) = undo.ep_captured_sq {
                self.set_piece(cs, undo.captured);
            }
        } else {
            self.set_piece(mv.to, undo.captured);
        }

        Ok(())
    }

    /// Plain-text board diagram from White's point of view.
    pub fn render_ascii(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            out.push(char::from(b'1' + rank));
            for file in 0..8 {
                out.push(' ');
                match self.board[(rank * 8 + file) as usize] {
                    Some(pc) => out.push(pc.to_fen_char()),
                    None => out.push('.'),
                }
            }
            out.push('\n');
        }
        out.push_str("  a b c d e f g h\n");
        out
    }
}

fn parse_placement(field: &str) -> Result<[Option<Piece>; 64], FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::Placement(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = [None; 64];
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx as i8; // FEN lists rank 8 first
        let mut file: i8 = 0;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                if d == 0 || d > 8 {
                    return Err(FenError::Placement(format!("bad empty run `{ch}`")));
                }
                file += d as i8;
            } else {
                let pc = Piece::from_fen_char(ch)
                    .ok_or_else(|| FenError::Placement(format!("unknown piece `{ch}`")))?;
                let s = sq(file, rank)
                    .ok_or_else(|| FenError::Placement(format!("rank `{rank_str}` overflows")))?;
                board[s as usize] = Some(pc);
                file += 1;
            }
            if file > 8 {
                return Err(FenError::Placement(format!("rank `{rank_str}` overflows")));
            }
        }
        if file != 8 {
            return Err(FenError::Placement(format!("rank `{rank_str}` too short")));
        }
    }
    Ok(board)
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
