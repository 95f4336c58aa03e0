use super::*;
use crate::movegen::legal_moves;

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

fn play(b: &mut Board, text: &str) -> (Move, Undo) {
    let mv = legal_moves(b)
        .into_iter()
        .find(|m| m.to_string() == text)
        .unwrap_or_else(|| panic!("{text} not legal"));
    let undo = b.make_move(mv);
    (mv, undo)
}

#[test]
fn test_set_and_get_piece() {
    let mut b = Board::empty();
    let rook = Piece::new(Color::White, PieceKind::Rook);
    b.set_piece(0, Some(rook));
    assert_eq!(b.piece_at(0), Some(rook));
    b.set_piece(0, None);
    assert_eq!(b.piece_at(0), None);
}

#[test]
fn test_initialize() {
    assert_eq!(Board::initialize(None).unwrap(), Board::startpos());
    let b = Board::initialize(Some("4k3/8/8/8/8/8/8/4K3 b")).unwrap();
    assert_eq!(b.side_to_move, Color::Black);
    assert!(Board::initialize(Some("not a fen")).is_err());
}

#[test]
fn test_find_king() {
    let b = Board::startpos();
    assert_eq!(b.find_king(Color::White), Ok(4));
    assert_eq!(b.find_king(Color::Black), Ok(60));

    let none = board("8/8/8/8/8/8/8/4K3 w - - 0 1");
    assert!(matches!(
        none.find_king(Color::Black),
        Err(ChessError::CorruptPosition { .. })
    ));
    assert!(none.validate().is_err());

    let two = board("4k3/8/8/8/8/8/8/K3K3 w - - 0 1");
    assert!(matches!(
        two.find_king(Color::White),
        Err(ChessError::CorruptPosition { .. })
    ));
}

#[test]
fn test_quiet_move_roundtrip_and_counters() {
    let mut b = Board::startpos();
    let before = b.clone();
    let (mv, undo) = play(&mut b, "g1f3");
    assert_eq!(b.halfmove_clock, 1);
    assert_eq!(b.fullmove_number, 1);
    assert_eq!(b.side_to_move, Color::Black);
    b.unmake_move(mv, undo);
    assert_eq!(b, before);
}

#[test]
fn test_double_push_sets_en_passant() {
    // Black pawn on d4 can take on e3
    let mut b = board("4k3/8/8/8/3p4/8/4P3/4K3 w - - 3 1");
    play(&mut b, "e2e4");
    assert_eq!(b.en_passant, coord_to_sq("e3"));
    assert_eq!(b.halfmove_clock, 0);
    play(&mut b, "e8f7");
    assert_eq!(b.en_passant, None);
    assert_eq!(b.fullmove_number, 2);
}

#[test]
fn test_double_push_without_capturer_leaves_no_target() {
    let mut b = Board::startpos();
    play(&mut b, "e2e4");
    assert_eq!(b.en_passant, None);
    assert_eq!(b.to_fen(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1");
}

#[test]
fn test_hash_ignores_uncapturable_target() {
    let reached = {
        let mut b = Board::startpos();
        play(&mut b, "e2e4");
        b
    };
    let mut forced = reached.clone();
    forced.en_passant = coord_to_sq("e3");
    assert_eq!(reached.position_hash(), forced.position_hash());
    assert!(!forced.en_passant_capturable(coord_to_sq("e3").unwrap()));
}

#[test]
fn test_en_passant_roundtrip() {
    let mut b = board("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
    let before = b.clone();
    let (mv, undo) = play(&mut b, "e5d6");
    assert_eq!(b.piece_at(coord_to_sq("d5").unwrap()), None);
    assert_eq!(
        b.piece_at(coord_to_sq("d6").unwrap()),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    b.unmake_move(mv, undo);
    assert_eq!(b, before);
}

#[test]
fn test_castling_roundtrip() {
    let mut b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 5 9");
    let before = b.clone();
    let (mv, undo) = play(&mut b, "e1g1");
    assert_eq!(
        b.piece_at(5),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert_eq!(b.piece_at(7), None);
    assert!(!b.castling.has(CastlingRights::WHITE_KINGSIDE));
    assert!(!b.castling.has(CastlingRights::WHITE_QUEENSIDE));
    assert!(b.castling.has(CastlingRights::BLACK_KINGSIDE));
    assert_eq!(b.halfmove_clock, 6);
    b.unmake_move(mv, undo);
    assert_eq!(b, before);
}

#[test]
fn test_rook_capture_clears_right() {
    let mut b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    play(&mut b, "a1a8");
    assert!(!b.castling.has(CastlingRights::WHITE_QUEENSIDE));
    assert!(!b.castling.has(CastlingRights::BLACK_QUEENSIDE));
    assert!(b.castling.has(CastlingRights::BLACK_KINGSIDE));
}

#[test]
fn test_promotion_roundtrip() {
    let mut b = board("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let before = b.clone();
    let (mv, undo) = play(&mut b, "a7b8n");
    assert_eq!(
        b.piece_at(57),
        Some(Piece::new(Color::White, PieceKind::Knight))
    );
    b.unmake_move(mv, undo);
    assert_eq!(b, before);
}

#[test]
fn test_insufficient_material() {
    assert!(board("8/8/8/4k3/8/4K3/8/8 w - - 0 1").is_insufficient_material());
    assert!(board("8/8/8/4k3/8/4KB2/8/8 w - - 0 1").is_insufficient_material());
    assert!(board("8/8/4n3/4k3/8/4K3/8/8 w - - 0 1").is_insufficient_material());
    // Bishops on f8 and c1 are both dark-squared
    assert!(board("5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1").is_insufficient_material());
    assert!(!board("2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1").is_insufficient_material());
    assert!(!board("8/8/8/4k3/8/4K3/4P3/8 w - - 0 1").is_insufficient_material());
    assert!(!board("8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1").is_insufficient_material());
}

#[test]
fn test_fifty_move_rule() {
    assert!(board("8/8/8/4k3/8/4K3/8/8 w - - 100 60").is_fifty_move_draw());
    assert!(!board("8/8/8/4k3/8/4K3/8/8 w - - 99 60").is_fifty_move_draw());
}
