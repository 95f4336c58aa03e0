use crate::{board::Board, movegen::legal_moves_into, types::Move};

/// Number of leaf positions reachable in exactly `depth` legal plies.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    count(board, &mut layers[..])
}

/// Per-root-move leaf counts, in generation order.
pub fn perft_divide(board: &mut Board, depth: u8) -> Vec<(Move, u64)> {
    let mut roots = Vec::with_capacity(64);
    legal_moves_into(board, &mut roots);
    if depth == 0 {
        return Vec::new();
    }
    let mut layers = vec![Vec::with_capacity(64); depth as usize - 1];
    roots
        .into_iter()
        .map(|mv| {
            let undo = board.make_move(mv);
            let nodes = count(board, &mut layers[..]);
            board.unmake_move(mv, undo);
            (mv, nodes)
        })
        .collect()
}

// One move buffer per remaining ply, reused across siblings.
fn count(board: &mut Board, layers: &mut [Vec<Move>]) -> u64 {
    let Some((buf, rest)) = layers.split_first_mut() else {
        return 1;
    };
    legal_moves_into(board, buf);
    if rest.is_empty() {
        return buf.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in buf.iter().copied() {
        let undo = board.make_move(mv);
        nodes += count(board, rest);
        board.unmake_move(mv, undo);
    }
    nodes
}
