//! Exhaustive make/unmake round-trip and legality sweeps over small game
//! trees: every move must restore every field, and no legal move may leave
//! the mover's own king attacked.

use gambit_core::{legal_moves, Position};

const FENS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    // Pawn tension in the center
    "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
    // En-passant target set
    "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
    // Promotions for both sides, including a promotion capture on a1
    "8/P6k/8/8/8/8/1p6/R3K3 b - - 0 1",
    // Sliding-piece middlegame
    "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2NP1N2/PPP2PPP/R1BQK2R w KQkq - 4 5",
];

fn sweep(pos: &mut Position, depth: u8) {
    if depth == 0 {
        return;
    }
    let mover = pos.side_to_move;
    for mv in legal_moves(pos) {
        let before = pos.clone();
        pos.make_move(mv);
        assert!(
            !pos.in_check(mover),
            "legal move left the mover in check in {}",
            before.to_fen()
        );
        sweep(pos, depth - 1);
        pos.unmake_move().expect("history cannot be empty here");
        assert_eq!(
            *pos, before,
            "make/unmake failed to restore {}",
            before.to_fen()
        );
    }
}

#[test]
fn make_unmake_round_trips_small_trees() {
    for fen in FENS {
        let mut pos = Position::from_fen(fen).unwrap();
        sweep(&mut pos, 3);
        assert_eq!(pos.to_fen(), *fen);
    }
}
