use rayon::prelude::*;

use pig_chess_core::{Board, START_FEN, perft, perft_divide};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 1_000_000;

// (fen, [(depth, nodes)]) from the published perft suites
const CASES: &[(&str, &[(u8, u64)])] = &[
    (START_FEN, &[(1, 20), (2, 400), (3, 8_902), (4, 197_281), (5, 4_865_609)]),
    (
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        &[(1, 48), (2, 2_039), (3, 97_862), (4, 4_085_603)],
    ),
    (
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        &[(1, 14), (2, 191), (3, 2_812), (4, 43_238), (5, 674_624)],
    ),
    (
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        &[(1, 6), (2, 264), (3, 9_467), (4, 422_333)],
    ),
    (
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        &[(1, 44), (2, 1_486), (3, 62_379)],
    ),
];

#[test]
fn perft_known_positions() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();

    CASES.par_iter().for_each(|(fen, depths)| {
        for &(depth, expected) in depths.iter() {
            if !full && expected > NODE_LIMIT {
                eprintln!(
                    "Skipping depth {depth} for '{fen}' ({expected} nodes); \
                     set {FULL_PERFT_ENV}=1 to run all."
                );
                continue;
            }
            let mut board = Board::from_fen(fen).unwrap();
            let before = board.clone();
            let got = perft(&mut board, depth);
            assert_eq!(
                got, expected,
                "Perft mismatch for FEN '{fen}' at depth {depth}"
            );
            assert_eq!(board, before, "perft must leave the board unchanged");
        }
    });
}

#[test]
fn perft_divide_sums_to_perft() {
    let mut board = Board::startpos();
    let split = perft_divide(&mut board, 3);
    assert_eq!(split.len(), 20);
    assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 8_902);
    assert_eq!(perft(&mut board, 0), 1);
}
