use super::*;
use gambit_core::{coord_to_sq, Move, Piece};

#[test]
fn test_startpos_is_balanced() {
    let pos = Position::startpos();
    assert_eq!(evaluate(&pos), 0);
}

#[test]
fn test_eval_is_independent_of_side_to_move() {
    let w = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    let b = Position::from_fen("4k3/8/8/8/8/8/8/4K2R b K - 0 1").unwrap();
    assert_eq!(evaluate(&w), evaluate(&b));
}

#[test]
fn test_extra_rook_is_five_hundred() {
    // Kings cancel; no pawn/knight tables in play.
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    assert_eq!(evaluate(&pos), 500);
}

#[test]
fn test_pawn_table_rewards_the_center_push() {
    let mut pos = Position::startpos();
    pos.make_move(Move::new(
        coord_to_sq("e2").unwrap(),
        coord_to_sq("e4").unwrap(),
    ));
    // e2 sits on a -20 table square, e4 on +20.
    assert_eq!(evaluate(&pos), 40);
}

#[test]
fn test_knight_table_rewards_centralisation() {
    let center = Position::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1").unwrap();
    let rim = Position::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").unwrap();
    assert_eq!(evaluate(&center), 320 + 20);
    assert_eq!(evaluate(&rim), 320 - 50);
    assert!(evaluate(&center) > evaluate(&rim));
}

#[test]
fn test_mirrored_pawns_cancel() {
    // White pawn e4 and black pawn e5 occupy mirrored table squares.
    let pos = Position::from_fen("4k3/8/8/4p3/4P3/8/8/4K3 w - - 0 1").unwrap();
    assert_eq!(evaluate(&pos), 0);
}

#[test]
fn test_color_swap_negates_material_eval() {
    // Material-only position: flipping every piece's color in place must
    // negate the score exactly.
    let pos = Position::from_fen("4k3/2r5/8/8/8/5B2/1Q6/4K3 w - - 0 1").unwrap();
    let base = evaluate(&pos);
    assert_ne!(base, 0);

    let mut flipped = pos.clone();
    for s in 0..64u8 {
        if let Some(pc) = flipped.piece_at(s) {
            flipped.set_piece(
                s,
                Some(Piece {
                    color: pc.color.other(),
                    kind: pc.kind,
                }),
            );
        }
    }
    assert_eq!(evaluate(&flipped), -base);
}
