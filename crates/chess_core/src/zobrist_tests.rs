use super::*;
use crate::{board::Board, types::{Color, Move, PieceKind}};

#[test]
fn test_zobrist_keys_unique() {
    let mut seen = std::collections::HashSet::new();
    for row in &ZOBRIST.pieces {
        for &key in row {
            assert!(seen.insert(key), "Duplicate piece key");
        }
    }
    assert!(seen.insert(ZOBRIST.side_to_move));
    for &key in ZOBRIST.castling.iter().chain(&ZOBRIST.en_passant) {
        assert!(seen.insert(key), "Duplicate state key");
    }
}

#[test]
fn test_piece_key_depends_on_color_and_square() {
    let wp = Piece::new(Color::White, PieceKind::Pawn);
    let bp = Piece::new(Color::Black, PieceKind::Pawn);
    assert_ne!(ZOBRIST.piece_key(wp, 8), ZOBRIST.piece_key(wp, 9));
    assert_ne!(ZOBRIST.piece_key(wp, 8), ZOBRIST.piece_key(bp, 8));
}

#[test]
fn test_hash_ignores_move_counters() {
    let a = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let b = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 12 40").unwrap();
    assert_eq!(a.position_hash(), b.position_hash());
}

#[test]
fn test_hash_distinguishes_state() {
    let base = Board::startpos();
    let mut black = base.clone();
    black.side_to_move = Color::Black;
    assert_ne!(base.position_hash(), black.position_hash());

    let kq = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1").unwrap();
    assert_ne!(base.position_hash(), kq.position_hash());

    // d4 pawn can take en passant
    let ep = Board::from_fen("rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
        .unwrap();
    let no_ep =
        Board::from_fen("rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1").unwrap();
    assert_ne!(ep.position_hash(), no_ep.position_hash());

    // Nothing can take: same key as without the target
    let ep = Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
        .unwrap();
    let no_ep =
        Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1").unwrap();
    assert_eq!(ep.position_hash(), no_ep.position_hash());
}

#[test]
fn test_hash_restored_by_unmake() {
    let mut b = Board::startpos();
    let key = b.position_hash();
    let mv = Move::new(12, 28); // e2e4
    let undo = b.make_move(mv);
    assert_ne!(b.position_hash(), key);
    b.unmake_move(mv, undo);
    assert_eq!(b.position_hash(), key);
}
