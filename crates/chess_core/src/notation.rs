//! Coordinate move notation (`e2e4`, `e7e8q`).

use crate::{
    board::Board,
    error::{ChessError, Result},
    movegen::legal_moves,
    types::*,
};

/// Squares and promotion piece named by a move string, without any
/// reference to a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveText {
    pub from: u8,
    pub to: u8,
    pub promo: Option<PieceKind>,
}

pub fn parse_move_text(text: &str) -> Result<MoveText> {
    let txt = text.trim();
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return Err(ChessError::malformed_move(
            text,
            "expected 4 or 5 characters",
        ));
    }
    let from = coord_to_sq(&txt[0..2])
        .ok_or_else(|| ChessError::malformed_move(text, "from-square is off the board"))?;
    let to = coord_to_sq(&txt[2..4])
        .ok_or_else(|| ChessError::malformed_move(text, "to-square is off the board"))?;
    let promo = match txt[4..].chars().next() {
        None => None,
        Some(c) => match PieceKind::from_letter(c) {
            Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
            _ => {
                return Err(ChessError::malformed_move(
                    text,
                    format!("invalid promotion piece '{c}'"),
                ));
            }
        },
    };
    Ok(MoveText { from, to, promo })
}

/// Resolve move text against the legal moves of `board`, so the returned
/// move carries the right flags (castle, en passant, capture, check).
///
/// A pawn move to the last rank without a promotion letter promotes to a
/// queen.
pub fn parse_move(board: &Board, text: &str) -> Result<Move> {
    let parsed = parse_move_text(text)?;
    let legals = legal_moves(board);
    let wanted_promo = parsed.promo.or_else(|| {
        legals
            .iter()
            .any(|m| m.from == parsed.from && m.to == parsed.to && m.is_promotion())
            .then_some(PieceKind::Queen)
    });

    legals
        .into_iter()
        .find(|m| m.from == parsed.from && m.to == parsed.to && m.promo == wanted_promo)
        .ok_or_else(|| {
            let mut mv = Move::new(parsed.from, parsed.to);
            mv.promo = parsed.promo;
            ChessError::IllegalMove { mv }
        })
}

pub fn move_to_text(mv: Move) -> String {
    mv.to_string()
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
