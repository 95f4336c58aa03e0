//! Forsyth-Edwards Notation input and output.
//!
//! Only the piece placement and side-to-move fields are required; castling,
//! en passant and the move counters default to `-`, `-`, `0`, `1`.

use crate::{
    board::{Board, CastlingRights},
    error::{ChessError, Result},
    types::*,
};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    pub fn from_fen(fen: &str) -> Result<Self> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 || parts.len() > 6 {
            return Err(ChessError::invalid_position(format!(
                "expected 2 to 6 fields, found {}",
                parts.len()
            )));
        }

        let mut board = Board::empty();
        parse_placement(parts[0], &mut board)?;

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(ChessError::invalid_position(format!(
                    "invalid side to move '{other}'"
                )));
            }
        };

        if let Some(castle_part) = parts.get(2)
            && *castle_part != "-"
        {
            for c in castle_part.chars() {
                let right = match c {
                    'K' => CastlingRights::WHITE_KINGSIDE,
                    'Q' => CastlingRights::WHITE_QUEENSIDE,
                    'k' => CastlingRights::BLACK_KINGSIDE,
                    'q' => CastlingRights::BLACK_QUEENSIDE,
                    _ => {
                        return Err(ChessError::invalid_position(format!(
                            "invalid castling char '{c}'"
                        )));
                    }
                };
                board.castling.insert(right);
            }
        }

        if let Some(ep_part) = parts.get(3)
            && *ep_part != "-"
        {
            let ep = coord_to_sq(ep_part).ok_or_else(|| {
                ChessError::invalid_position(format!("invalid en passant square '{ep_part}'"))
            })?;
            check_en_passant(&board, ep, ep_part)?;
            board.en_passant = Some(ep);
        }

        if let Some(hmc) = parts.get(4) {
            board.halfmove_clock = hmc.parse().map_err(|_| {
                ChessError::invalid_position(format!("invalid halfmove clock '{hmc}'"))
            })?;
        }
        if let Some(fmn) = parts.get(5) {
            board.fullmove_number = fmn.parse().map_err(|_| {
                ChessError::invalid_position(format!("invalid fullmove number '{fmn}'"))
            })?;
        }

        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(90);
        for rank in (0..8i8).rev() {
            let mut empty = 0;
            for file in 0..8i8 {
                match sq(file, rank).and_then(|s| self.piece_at(s)) {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        let rights = [
            (CastlingRights::WHITE_KINGSIDE, 'K'),
            (CastlingRights::WHITE_QUEENSIDE, 'Q'),
            (CastlingRights::BLACK_KINGSIDE, 'k'),
            (CastlingRights::BLACK_QUEENSIDE, 'q'),
        ];
        let before = out.len();
        for (right, c) in rights {
            if self.castling.has(right) {
                out.push(c);
            }
        }
        if out.len() == before {
            out.push('-');
        }

        out.push(' ');
        match self.en_passant {
            Some(ep) => out.push_str(&sq_to_coord(ep)),
            None => out.push('-'),
        }

        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }
}

/// The target must sit behind an enemy pawn that just made a double push:
/// rank 6 with White to move, rank 3 with Black, and be empty.
fn check_en_passant(board: &Board, ep: u8, text: &str) -> Result<()> {
    let us = board.side_to_move;
    let target_rank = match us {
        Color::White => 5,
        Color::Black => 2,
    };
    let pushed = sq(file_of(ep), rank_of(ep) - us.forward());
    let enemy_pawn = Some(Piece::new(us.other(), PieceKind::Pawn));
    if rank_of(ep) != target_rank
        || board.piece_at(ep).is_some()
        || pushed.and_then(|s| board.piece_at(s)) != enemy_pawn
    {
        return Err(ChessError::invalid_position(format!(
            "en passant square '{text}' does not follow a double pawn push"
        )));
    }
    Ok(())
}

fn parse_placement(placement: &str, board: &mut Board) -> Result<()> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::invalid_position(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    // FEN lists rank 8 first
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx as i8;
        let mut file: i8 = 0;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                if d == 0 || d > 8 {
                    return Err(ChessError::invalid_position(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += d as i8;
            } else {
                let pc = Piece::from_symbol(ch).ok_or_else(|| {
                    ChessError::invalid_position(format!("unrecognized piece symbol '{ch}'"))
                })?;
                if let Some(s) = sq(file, rank) {
                    board.set_piece(s, Some(pc));
                }
                file += 1;
            }
            if file > 8 {
                return Err(ChessError::invalid_position(format!(
                    "rank {} has more than 8 squares",
                    rank + 1
                )));
            }
        }
        if file != 8 {
            return Err(ChessError::invalid_position(format!(
                "rank {} has {} squares",
                rank + 1,
                file
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
