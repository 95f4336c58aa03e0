//! Static evaluation: material plus optional piece-square bonuses.

use pig_chess_core::{Board, Color, PieceKind};

/// Score for being checkmated at the root, from the mated side's view.
/// Larger than any reachable material balance.
pub const MATE_SCORE: i32 = 99_999;

/// Material values in centipawns, indexed by `PieceKind::idx()`.
/// The king weight cancels out on any valid board.
const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 20_000];

// White's view, a1 first. Black reads the vertically mirrored square.
#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,   0,   0,   0,   0,  0,  0,
     5, 10,  10, -20, -20,  10, 10,  5,
     5, -5, -10,   0,   0, -10, -5,  5,
     0,  0,   0,  20,  20,   0,  0,  0,
     5,  5,  10,  25,  25,  10,  5,  5,
    10, 10,  20,  30,  30,  20, 10, 10,
    50, 50,  50,  50,  50,  50, 50, 50,
     0,  0,   0,   0,   0,   0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

/// Returns the material value of a piece in centipawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Material balance from the side to move's perspective.
pub fn evaluate(board: &Board) -> i32 {
    Evaluator::material_only().evaluate(board)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    positional: bool,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self { positional: true }
    }
}

impl Evaluator {
    pub fn new(positional: bool) -> Self {
        Self { positional }
    }

    pub fn material_only() -> Self {
        Self { positional: false }
    }

    pub fn is_positional(&self) -> bool {
        self.positional
    }

    /// Evaluates the position from the side to move's perspective.
    ///
    /// Returns a score in centipawns:
    /// - Positive = good for side to move
    /// - Negative = bad for side to move
    /// - 0 = equal position
    pub fn evaluate(&self, board: &Board) -> i32 {
        let mut score = 0i32;
        for (sq, pc) in board.pieces() {
            let mut v = piece_value(pc.kind);
            if self.positional {
                let idx = usize::from(match pc.color {
                    Color::White => sq,
                    Color::Black => sq ^ 56,
                });
                v += match pc.kind {
                    PieceKind::Pawn => PAWN_TABLE[idx],
                    PieceKind::Knight => KNIGHT_TABLE[idx],
                    PieceKind::Bishop => BISHOP_TABLE[idx],
                    _ => 0,
                };
            }
            score += if pc.color == Color::White { v } else { -v };
        }

        if board.side_to_move == Color::White {
            score
        } else {
            -score
        }
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
