use crate::{
    error::{ChessError, Result},
    types::*,
    zobrist::ZOBRIST,
};

/// Castling rights as a four-bit set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: CastlingRights = CastlingRights(1);
    pub const WHITE_QUEENSIDE: CastlingRights = CastlingRights(2);
    pub const BLACK_KINGSIDE: CastlingRights = CastlingRights(4);
    pub const BLACK_QUEENSIDE: CastlingRights = CastlingRights(8);
    pub const ALL: CastlingRights = CastlingRights(15);

    pub fn has(self, right: CastlingRights) -> bool {
        self.0 & right.0 == right.0
    }
    pub fn insert(&mut self, right: CastlingRights) {
        self.0 |= right.0;
    }
    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn kingside(c: Color) -> CastlingRights {
        match c {
            Color::White => Self::WHITE_KINGSIDE,
            Color::Black => Self::BLACK_KINGSIDE,
        }
    }
    pub fn queenside(c: Color) -> CastlingRights {
        match c {
            Color::White => Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_QUEENSIDE,
        }
    }

    /// Drop every right tied to `sq` (king or rook home square).
    fn touch(&mut self, sq: u8) {
        let lost = match sq {
            0 => Self::WHITE_QUEENSIDE.0,
            4 => Self::WHITE_KINGSIDE.0 | Self::WHITE_QUEENSIDE.0,
            7 => Self::WHITE_KINGSIDE.0,
            56 => Self::BLACK_QUEENSIDE.0,
            60 => Self::BLACK_KINGSIDE.0 | Self::BLACK_QUEENSIDE.0,
            63 => Self::BLACK_KINGSIDE.0,
            _ => 0,
        };
        self.0 &= !lost;
    }
}

/// Rook hop for a castling king move, keyed by the king's destination.
pub(crate) fn castle_rook_squares(king_to: u8) -> Option<(u8, u8)> {
    match king_to {
        6 => Some((7, 5)),
        2 => Some((0, 3)),
        62 => Some((63, 61)),
        58 => Some((56, 59)),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub squares: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// Everything `unmake_move` needs that the move itself does not carry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    /// A board with no pieces, White to move.
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();
        b.castling = CastlingRights::ALL;

        for f in 0..8 {
            b.squares[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.squares[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            b.squares[f] = Some(Piece::new(Color::White, kind));
            b.squares[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        b
    }

    /// Standard start position, or the given FEN.
    pub fn initialize(fen: Option<&str>) -> Result<Self> {
        match fen {
            Some(f) => Board::from_fen(f),
            None => Ok(Board::startpos()),
        }
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.squares[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.squares[sq as usize] = pc;
    }

    /// First king of `c` in square order. Cheap; assumes a valid board.
    pub fn king_sq(&self, c: Color) -> Option<u8> {
        (0..64u8).find(|&s| self.piece_at(s) == Some(Piece::new(c, PieceKind::King)))
    }

    /// The unique king of `c`, or `CorruptPosition` when there is none or
    /// more than one.
    pub fn find_king(&self, c: Color) -> Result<u8> {
        let king = Piece::new(c, PieceKind::King);
        let mut found = None;
        for s in 0..64u8 {
            if self.piece_at(s) == Some(king) {
                if found.is_some() {
                    return Err(ChessError::CorruptPosition {
                        reason: format!("more than one {c} king"),
                    });
                }
                found = Some(s);
            }
        }
        found.ok_or_else(|| ChessError::CorruptPosition {
            reason: format!("no {c} king"),
        })
    }

    /// Both kings present exactly once.
    pub fn validate(&self) -> Result<()> {
        self.find_king(Color::White)?;
        self.find_king(Color::Black)?;
        Ok(())
    }

    pub fn pieces(&self) -> impl Iterator<Item = (u8, Piece)> + '_ {
        (0..64u8).filter_map(|s| self.piece_at(s).map(|p| (s, p)))
    }

    pub fn make_move(&mut self, mv: Move) -> Undo {
        let from = mv.from;
        let to = mv.to;
        // Moves come from the generator; an empty from-square is a caller bug.
        let moved = self.squares[from as usize].unwrap_or_else(|| {
            panic!("make_move {mv}: no piece on from-square");
        });
        let mut captured = self.piece_at(to);

        let undo_castling = self.castling;
        let undo_ep = self.en_passant;
        let undo_hmc = self.halfmove_clock;
        let undo_fmn = self.fullmove_number;

        self.en_passant = None;

        if mv.is_en_passant() {
            let cap_sq = to.wrapping_add_signed(-8 * moved.color.forward());
            captured = self.piece_at(cap_sq);
            self.set_piece(cap_sq, None);
        }

        self.set_piece(from, None);
        let placed = match mv.promo {
            Some(kind) => Piece::new(moved.color, kind),
            None => moved,
        };
        self.set_piece(to, Some(placed));

        if mv.is_castle()
            && let Some((rf, rt)) = castle_rook_squares(to)
        {
            let rook = self.piece_at(rf);
            self.set_piece(rf, None);
            self.set_piece(rt, rook);
        }

        self.castling.touch(from);
        self.castling.touch(to);

        // Only recorded when an enemy pawn can actually take en passant.
        if moved.kind == PieceKind::Pawn
            && (rank_of(to) - rank_of(from)).abs() == 2
            && self.pawn_beside(to, moved.color.other())
        {
            self.en_passant = sq(file_of(from), (rank_of(from) + rank_of(to)) / 2);
        }

        self.halfmove_clock = if moved.kind == PieceKind::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        Undo {
            captured,
            castling: undo_castling,
            en_passant: undo_ep,
            halfmove_clock: undo_hmc,
            fullmove_number: undo_fmn,
            moved_piece: moved,
        }
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if mv.is_castle()
            && let Some((rf, rt)) = castle_rook_squares(mv.to)
        {
            let rook = self.piece_at(rt);
            self.set_piece(rt, None);
            self.set_piece(rf, rook);
        }

        // The moved piece goes back as it was, which also reverts promotions.
        self.set_piece(mv.from, Some(undo.moved_piece));

        if mv.is_en_passant() {
            let cap_sq = mv.to.wrapping_add_signed(-8 * undo.moved_piece.color.forward());
            self.set_piece(mv.to, None);
            self.set_piece(cap_sq, undo.captured);
        } else {
            self.set_piece(mv.to, undo.captured);
        }
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// K v K, K+minor v K, or bishops only with all bishops on one square color.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = 0;
        let mut knights = 0;
        let mut bishop_colors = [false; 2];
        for (s, pc) in self.pieces() {
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
                PieceKind::Knight => {
                    minors += 1;
                    knights += 1;
                }
                PieceKind::Bishop => {
                    minors += 1;
                    bishop_colors[((file_of(s) + rank_of(s)) % 2) as usize] = true;
                }
            }
        }
        if minors <= 1 {
            return true;
        }
        knights == 0 && !(bishop_colors[0] && bishop_colors[1])
    }

    /// Zobrist key of the position, computed from scratch.
    pub fn position_hash(&self) -> u64 {
        let mut h = 0u64;
        for (s, pc) in self.pieces() {
            h ^= ZOBRIST.piece_key(pc, s);
        }
        if self.side_to_move == Color::Black {
            h ^= ZOBRIST.side_to_move;
        }
        for i in 0..4 {
            if self.castling.bits() & (1 << i) != 0 {
                h ^= ZOBRIST.castling_key(i);
            }
        }
        if let Some(ep) = self.en_passant
            && self.en_passant_capturable(ep)
        {
            h ^= ZOBRIST.ep_key(file_of(ep) as u8);
        }
        h
    }

    /// A pawn of `capturer` stands on a file next to `pawn_sq`, same rank.
    fn pawn_beside(&self, pawn_sq: u8, capturer: Color) -> bool {
        let pawn = Some(Piece::new(capturer, PieceKind::Pawn));
        [-1, 1].into_iter().any(|df| {
            sq(file_of(pawn_sq) + df, rank_of(pawn_sq)).is_some_and(|s| self.piece_at(s) == pawn)
        })
    }

    /// The side to move has a pawn that can take en passant on `ep`.
    pub fn en_passant_capturable(&self, ep: u8) -> bool {
        let us = self.side_to_move;
        sq(file_of(ep), rank_of(ep) - us.forward()).is_some_and(|pushed| {
            self.piece_at(pushed) == Some(Piece::new(us.other(), PieceKind::Pawn))
                && self.pawn_beside(pushed, us)
        })
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
