use super::*;

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

#[test]
fn test_startpos_is_balanced() {
    let b = Board::startpos();
    assert_eq!(evaluate(&b), 0);
    assert_eq!(Evaluator::default().evaluate(&b), 0);
}

#[test]
fn test_material_sign_follows_side_to_move() {
    // White is a queen up
    let w = board("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
    let b = board("4k3/8/8/8/8/8/8/3QK3 b - - 0 1");
    assert_eq!(evaluate(&w), 900);
    assert_eq!(evaluate(&b), -900);
}

#[test]
fn test_piece_values() {
    assert_eq!(piece_value(PieceKind::Pawn), 100);
    assert!(piece_value(PieceKind::Knight) >= 300);
    assert!(piece_value(PieceKind::Rook) > piece_value(PieceKind::Bishop));
    assert!(piece_value(PieceKind::Queen) > piece_value(PieceKind::Rook));
    // Nothing material comes close to a mate
    let all_white = "QQQQQQQQ/QQQQQQQQ/8/8/8/8/8/4K2k w - - 0 1";
    assert!(evaluate(&board(all_white)) < MATE_SCORE);
}

#[test]
fn test_positional_bonus_is_mirrored() {
    let e = Evaluator::default();
    // Symmetric knights on f3 / f6
    let b = board("4k3/8/5n2/8/8/5N2/8/4K3 w - - 0 1");
    assert_eq!(e.evaluate(&b), 0);
    // Centralised knight beats one on the rim
    let center = board("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1");
    let rim = board("4k3/8/8/8/N7/8/8/4K3 w - - 0 1");
    assert!(e.evaluate(&center) > e.evaluate(&rim));
    assert_eq!(
        Evaluator::material_only().evaluate(&center),
        Evaluator::material_only().evaluate(&rim)
    );
}
