//! Attack detection on the mailbox board.
//!
//! `is_square_attacked` answers "could a piece of this color capture on that
//! square" by looking outward from the target square, so the same routine
//! serves the legality filter, castling path checks and check reporting.

use crate::{board::Board, types::*};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Squares reached by stepping from `from` by `delta` until the board edge.
pub fn ray(from: u8, (df, dr): (i8, i8)) -> impl Iterator<Item = u8> {
    let (f0, r0) = (file_of(from), rank_of(from));
    (1..8i8).map_while(move |k| sq(f0 + df * k, r0 + dr * k))
}

/// Squares one offset away from `from` that are on the board.
pub fn steps(from: u8, offsets: &'static [(i8, i8)]) -> impl Iterator<Item = u8> {
    let (f0, r0) = (file_of(from), rank_of(from));
    offsets.iter().filter_map(move |&(df, dr)| sq(f0 + df, r0 + dr))
}

impl Board {
    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let is = |s: u8, kind: PieceKind| self.piece_at(s) == Some(Piece::new(by, kind));

        // A pawn of `by` attacks the target from one rank behind it.
        let tf = file_of(target);
        let pawn_rank = rank_of(target) - by.forward();
        for df in [-1, 1] {
            if let Some(s) = sq(tf + df, pawn_rank)
                && is(s, PieceKind::Pawn)
            {
                return true;
            }
        }

        if steps(target, &KNIGHT_OFFSETS).any(|s| is(s, PieceKind::Knight)) {
            return true;
        }
        if steps(target, &KING_OFFSETS).any(|s| is(s, PieceKind::King)) {
            return true;
        }

        let slider_hit = |dirs: &[(i8, i8)], kind: PieceKind| {
            dirs.iter().any(|&d| {
                // First occupied square along the ray decides.
                ray(target, d)
                    .find_map(|s| self.piece_at(s))
                    .is_some_and(|pc| {
                        pc.color == by && (pc.kind == kind || pc.kind == PieceKind::Queen)
                    })
            })
        };
        slider_hit(&DIAGONALS, PieceKind::Bishop) || slider_hit(&ORTHOGONALS, PieceKind::Rook)
    }

    /// Whether `c`'s king is attacked. A board without that king is never in
    /// check here; use `find_king` where the invariant must be enforced.
    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
