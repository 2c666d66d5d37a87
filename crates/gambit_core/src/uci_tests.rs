use super::*;

#[test]
fn test_move_text_encoding() {
    assert_eq!(move_to_uci(Move::new(12, 28)), "e2e4");
    assert_eq!(
        move_to_uci(Move::promotion(48, 56, PieceKind::Queen)),
        "a7a8q"
    );
    assert_eq!(
        move_to_uci(Move::promotion(48, 56, PieceKind::Knight)),
        "a7a8n"
    );
}

#[test]
fn test_decode_move_text() {
    assert_eq!(decode_move_text("e2e4"), Some((12, 28, None)));
    assert_eq!(
        decode_move_text("a7a8q"),
        Some((48, 56, Some(PieceKind::Queen)))
    );
    assert_eq!(decode_move_text("e2e9"), None);
    assert_eq!(decode_move_text("e2"), None);
    assert_eq!(decode_move_text("e2e4x"), None);
    assert_eq!(decode_move_text("e2e4qq"), None);
}

#[test]
fn test_parse_uci_move_matches_legal_moves() {
    let pos = Position::startpos();
    let mv = parse_uci_move(&pos, "e2e4").expect("e2e4 is legal");
    assert_eq!(mv.from, 12);
    assert_eq!(mv.to, 28);
    assert!(parse_uci_move(&pos, "e2e5").is_none());
    assert!(parse_uci_move(&pos, "nonsense").is_none());
}

#[test]
fn test_parse_uci_move_recovers_en_passant_flag() {
    let pos = Position::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
        .unwrap();
    let mv = parse_uci_move(&pos, "e5d6").expect("exd6 is legal");
    assert!(mv.is_en_passant);
}

#[test]
fn test_parse_uci_move_requires_promotion_letter() {
    let pos = Position::from_fen("8/P6k/8/8/8/8/8/7K w - - 0 1").unwrap();
    assert!(parse_uci_move(&pos, "a7a8").is_none());
    let mv = parse_uci_move(&pos, "a7a8r").unwrap();
    assert_eq!(mv.promo, Some(PieceKind::Rook));
}

#[test]
fn test_set_position_startpos_with_moves() {
    let mut pos = Position::startpos();
    set_position_from_uci(&mut pos, &["startpos", "moves", "e2e4", "e7e5"]).unwrap();
    // Clocks are carried state and stay at their imported values.
    assert_eq!(
        pos.to_fen(),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 1"
    );
}

#[test]
fn test_set_position_from_fen() {
    let mut pos = Position::startpos();
    let fen = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2";
    set_position_from_uci(
        &mut pos,
        &[
            "fen", "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR", "w", "KQkq", "-", "0", "2",
        ],
    )
    .unwrap();
    assert_eq!(pos.to_fen(), fen);
}

#[test]
fn test_set_position_rejects_malformed_fen_and_keeps_position() {
    let mut pos = Position::startpos();
    set_position_from_uci(&mut pos, &["startpos", "moves", "e2e4"]).unwrap();
    let before = pos.clone();
    let err = set_position_from_uci(&mut pos, &["fen", "not", "a", "fen", "at", "all", "x"]);
    assert!(err.is_err());
    assert_eq!(pos, before);
}

#[test]
fn test_unmatched_move_falls_back_to_coordinate_trust() {
    // The generator never emits castling; an adapter-supplied e1g1 is
    // applied as a bare king move, rook untouched.
    let mut pos = Position::startpos();
    set_position_from_uci(
        &mut pos,
        &["fen", "4k3/8/8/8/8/8/8/4K2R", "w", "K", "-", "0", "1", "moves", "e1g1"],
    )
    .unwrap();
    assert_eq!(
        pos.piece_at(coord_to_sq("g1").unwrap()),
        Some(Piece {
            color: Color::White,
            kind: PieceKind::King
        })
    );
    assert_eq!(
        pos.piece_at(coord_to_sq("h1").unwrap()),
        Some(Piece {
            color: Color::White,
            kind: PieceKind::Rook
        })
    );
}
