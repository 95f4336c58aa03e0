use crate::{
    attacks::{DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS, ray, steps},
    board::{Board, CastlingRights},
    types::*,
};

const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the board only once.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut tmp = board.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// Every pseudo-legal candidate is played, the mover's king is tested, and
/// the move is taken back; the board is identical on return. Moves that
/// attack the enemy king get the `CHECK` flag. The output is ordered by
/// from-square, then to-square.
///
/// A king is never captured, even in a set-up position where the side not
/// to move is already in check.
pub fn legal_moves_into(board: &mut Board, out: &mut Vec<Move>) {
    out.clear();
    pseudo_legal_moves_into(board, out);

    let mover = board.side_to_move;
    out.retain_mut(|mv| {
        if board.piece_at(mv.to).is_some_and(|pc| pc.kind == PieceKind::King) {
            return false;
        }
        let undo = board.make_move(*mv);
        let legal = !board.in_check(mover);
        if legal && board.in_check(mover.other()) {
            mv.flags.insert(MoveFlags::CHECK);
        }
        board.unmake_move(*mv, undo);
        legal
    });
    // Stable: promotion choices keep Q, R, B, N order.
    out.sort_by_key(|mv| (mv.from, mv.to));
}

pub fn pseudo_legal_moves(board: &Board) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    pseudo_legal_moves_into(board, &mut out);
    out
}

/// Moves that follow piece geometry for the side to move, without checking
/// whether the mover's own king is left attacked.
pub fn pseudo_legal_moves_into(board: &Board, out: &mut Vec<Move>) {
    let us = board.side_to_move;
    for (from, pc) in board.pieces() {
        if pc.color != us {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(board, from, us, out),
            PieceKind::Knight => gen_steps(board, from, us, &KNIGHT_OFFSETS, out),
            PieceKind::Bishop => gen_slider(board, from, us, &DIAGONALS, out),
            PieceKind::Rook => gen_slider(board, from, us, &ORTHOGONALS, out),
            PieceKind::Queen => gen_slider(board, from, us, &ALL_DIRECTIONS, out),
            PieceKind::King => {
                gen_steps(board, from, us, &KING_OFFSETS, out);
                gen_castle(board, from, us, out);
            }
        }
    }
}

/// Set `CHECKMATE` or `STALEMATE` on a legal move by looking at the
/// opponent's replies.
pub fn annotate_terminal(board: &mut Board, mv: &mut Move) {
    let undo = board.make_move(*mv);
    let mut replies = Vec::new();
    legal_moves_into(board, &mut replies);
    if replies.is_empty() {
        if board.in_check(board.side_to_move) {
            mv.flags.insert(MoveFlags::CHECK | MoveFlags::CHECKMATE);
        } else {
            mv.flags.insert(MoveFlags::STALEMATE);
        }
    }
    board.unmake_move(*mv, undo);
}

fn push_pawn_move(from: u8, to: u8, promo_rank: i8, flags: MoveFlags, out: &mut Vec<Move>) {
    if rank_of(to) == promo_rank {
        for pk in PieceKind::PROMOTIONS {
            let mut mv = Move::with_flags(from, to, flags | MoveFlags::PROMOTION);
            mv.promo = Some(pk);
            out.push(mv);
        }
    } else {
        out.push(Move::with_flags(from, to, flags));
    }
}

fn gen_pawn(board: &Board, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let dir = c.forward();
    let (start_rank, promo_rank) = match c {
        Color::White => (1, 7),
        Color::Black => (6, 0),
    };

    // forward 1, then forward 2 from the start rank through an empty square
    if let Some(to) = sq(f, r + dir)
        && board.piece_at(to).is_none()
    {
        push_pawn_move(from, to, promo_rank, MoveFlags::NORMAL, out);

        if r == start_rank
            && let Some(to2) = sq(f, r + 2 * dir)
            && board.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        match board.piece_at(to) {
            Some(tpc) if tpc.color != c => {
                push_pawn_move(from, to, promo_rank, MoveFlags::CAPTURE, out)
            }
            None if board.en_passant == Some(to)
                && sq(f + df, r).and_then(|s| board.piece_at(s))
                    == Some(Piece::new(c.other(), PieceKind::Pawn)) =>
            {
                out.push(Move::with_flags(
                    from,
                    to,
                    MoveFlags::CAPTURE | MoveFlags::EN_PASSANT,
                ))
            }
            _ => {}
        }
    }
}

fn gen_steps(
    board: &Board,
    from: u8,
    c: Color,
    offsets: &'static [(i8, i8)],
    out: &mut Vec<Move>,
) {
    for to in steps(from, offsets) {
        match board.piece_at(to) {
            None => out.push(Move::new(from, to)),
            Some(pc) if pc.color != c => {
                out.push(Move::with_flags(from, to, MoveFlags::CAPTURE))
            }
            _ => {}
        }
    }
}

fn gen_slider(board: &Board, from: u8, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &d in dirs {
        for to in ray(from, d) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) => {
                    if pc.color != c {
                        out.push(Move::with_flags(from, to, MoveFlags::CAPTURE));
                    }
                    break;
                }
            }
        }
    }
}

fn gen_castle(board: &Board, from: u8, c: Color, out: &mut Vec<Move>) {
    let king_from = match c {
        Color::White => 4u8,
        Color::Black => 60u8,
    };
    if from != king_from {
        return;
    }
    let rook = Some(Piece::new(c, PieceKind::Rook));
    let enemy = c.other();

    // (right, rook square, squares that must be empty, squares the king crosses)
    let sides: [(CastlingRights, u8, &[u8], [u8; 2]); 2] = [
        (
            CastlingRights::kingside(c),
            from + 3,
            &[from + 1, from + 2],
            [from + 1, from + 2],
        ),
        (
            CastlingRights::queenside(c),
            from - 4,
            &[from - 1, from - 2, from - 3],
            [from - 1, from - 2],
        ),
    ];

    let mut in_check = None;
    for (right, rook_sq, empty, crossed) in sides {
        if !board.castling.has(right)
            || board.piece_at(rook_sq) != rook
            || empty.iter().any(|&s| board.piece_at(s).is_some())
        {
            continue;
        }
        // Can't castle out of check.
        if *in_check.get_or_insert_with(|| board.is_square_attacked(from, enemy)) {
            return;
        }
        if crossed.iter().any(|&s| board.is_square_attacked(s, enemy)) {
            continue;
        }
        out.push(Move::with_flags(from, crossed[1], MoveFlags::CASTLE));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
