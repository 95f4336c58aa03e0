use super::*;

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

fn at(c: &str) -> u8 {
    coord_to_sq(c).unwrap()
}

#[test]
fn test_ray_and_steps() {
    // Rook on e4 sees 14 squares on an empty board
    let n: usize = ORTHOGONALS.iter().map(|&d| ray(at("e4"), d).count()).sum();
    assert_eq!(n, 14);
    // Bishop on e4: 13
    let n: usize = DIAGONALS.iter().map(|&d| ray(at("e4"), d).count()).sum();
    assert_eq!(n, 13);
    // Knight in the corner has 2 targets
    assert_eq!(steps(at("a1"), &KNIGHT_OFFSETS).count(), 2);
    assert_eq!(steps(at("e4"), &KING_OFFSETS).count(), 8);
}

#[test]
fn test_pawn_attacks_diagonal_only() {
    let b = board("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
    assert!(b.is_square_attacked(at("d5"), Color::White));
    assert!(b.is_square_attacked(at("f5"), Color::White));
    // The push square is not attacked
    assert!(!b.is_square_attacked(at("e5"), Color::White));
    // Pawns never attack backwards
    assert!(!b.is_square_attacked(at("d3"), Color::White));

    let b = board("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1");
    assert!(b.is_square_attacked(at("c4"), Color::Black));
    assert!(b.is_square_attacked(at("e4"), Color::Black));
    assert!(!b.is_square_attacked(at("c6"), Color::Black));
}

#[test]
fn test_sliders_are_blocked() {
    // Rook on a1, own pawn on a4
    let b = board("4k3/8/8/8/P7/8/8/R3K3 w - - 0 1");
    assert!(b.is_square_attacked(at("a3"), Color::White));
    assert!(b.is_square_attacked(at("a4"), Color::White));
    assert!(!b.is_square_attacked(at("a5"), Color::White));

    // Bishop on c1 blocked by a black pawn on e3
    let b = board("4k3/8/8/8/8/4p3/8/2B1K3 w - - 0 1");
    assert!(b.is_square_attacked(at("e3"), Color::White));
    assert!(!b.is_square_attacked(at("f4"), Color::White));
}

#[test]
fn test_queen_and_knight_attacks() {
    let b = board("4k3/8/8/8/3Q4/8/8/4K1n1 w - - 0 1");
    assert!(b.is_square_attacked(at("h8"), Color::White));
    assert!(b.is_square_attacked(at("d8"), Color::White));
    assert!(!b.is_square_attacked(at("e6"), Color::White));
    // Knight on g1 hits e2, f3, h3
    assert!(b.is_square_attacked(at("e2"), Color::Black));
    assert!(b.is_square_attacked(at("f3"), Color::Black));
    assert!(!b.is_square_attacked(at("g3"), Color::Black));
}

#[test]
fn test_in_check() {
    let b = board("4k3/8/8/8/8/8/8/4K2r w - - 0 1");
    assert!(b.in_check(Color::White));
    assert!(!b.in_check(Color::Black));

    // Interposed piece breaks the check
    let b = board("4k3/8/8/8/8/8/8/4KB1r w - - 0 1");
    assert!(!b.in_check(Color::White));
}
