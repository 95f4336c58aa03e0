//! Zobrist keys for position identity.
//!
//! Two positions with the same placement, side to move, castling rights and
//! en passant file share a key. The game session compares keys to detect
//! repeated positions.

use crate::types::Piece;

pub struct ZobristKeys {
    /// Indexed by `color * 6 + kind`, then square.
    pub pieces: [[u64; 64]; 12],
    /// XOR-ed in when Black is to move.
    pub side_to_move: u64,
    /// One key per castling-rights bit (K, Q, k, q).
    pub castling: [u64; 4],
    /// One key per en passant file.
    pub en_passant: [u64; 8],
}

const fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl ZobristKeys {
    /// Keys from a fixed seed so hashes are stable across runs.
    pub const fn new() -> Self {
        let mut state = 0x5049_4743_4845_5353u64;

        let mut pieces = [[0u64; 64]; 12];
        let mut p = 0;
        while p < 12 {
            let mut s = 0;
            while s < 64 {
                pieces[p][s] = splitmix64(&mut state);
                s += 1;
            }
            p += 1;
        }

        let side_to_move = splitmix64(&mut state);

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            castling[i] = splitmix64(&mut state);
            i += 1;
        }

        let mut en_passant = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            en_passant[i] = splitmix64(&mut state);
            i += 1;
        }

        ZobristKeys {
            pieces,
            side_to_move,
            castling,
            en_passant,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[piece.color.idx() * 6 + piece.kind.idx()][sq as usize]
    }

    /// Castling bit index: 0=K, 1=Q, 2=k, 3=q.
    #[inline(always)]
    pub fn castling_key(&self, index: usize) -> u64 {
        self.castling[index]
    }

    #[inline(always)]
    pub fn ep_key(&self, file: u8) -> u64 {
        self.en_passant[file as usize]
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
