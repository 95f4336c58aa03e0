//! Negamax search with alpha-beta pruning

use pig_chess_core::{
    Board, Move, Result, SearchLimits, SearchResult, TimeControl, legal_moves_into,
};
use tracing::{debug, instrument, warn};

use crate::eval::{Evaluator, MATE_SCORE};

/// Outside every reachable score, so negating it never overflows.
pub const INFINITY: i32 = MATE_SCORE + 1_000;

/// Searches `board` to a fixed depth and returns the best move with its
/// score, or `None` when the side to move has no legal moves.
///
/// Ties keep the earliest move in generation order.
pub fn find_best_move(
    board: &Board,
    depth: u8,
    evaluator: &Evaluator,
) -> Result<Option<(Move, i32)>> {
    board.validate()?;
    let tc = TimeControl::unlimited();
    let mut tmp = board.clone();
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut moves);

    let mut searcher = Searcher::new(evaluator, &tc);
    Ok(searcher.search_root(&mut tmp, &moves, depth.max(1)))
}

/// Iterative deepening from depth 1 up to `limits.depth`.
///
/// When the limits stop the search, the answer of the deepest completed
/// iteration is returned. Without a time limit this gives the same move
/// and score as [`find_best_move`] at the full depth.
#[instrument(skip_all, fields(depth = limits.depth))]
pub fn search(board: &Board, limits: &SearchLimits, evaluator: &Evaluator) -> Result<SearchResult> {
    board.validate()?;
    let tc = limits.start();
    let mut tmp = board.clone();
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut moves);

    let mut searcher = Searcher::new(evaluator, &tc);

    if moves.is_empty() {
        let score = if tmp.in_check(tmp.side_to_move) { -MATE_SCORE } else { 0 };
        return Ok(SearchResult {
            best_move: None,
            score,
            depth: 0,
            nodes: 1,
            evals: 0,
            stopped: false,
        });
    }

    let mut best: Option<(Move, i32)> = None;
    let mut completed = 0u8;
    for depth in 1..=limits.depth.max(1) {
        let root = searcher.search_root(&mut tmp, &moves, depth);
        if searcher.stopped {
            warn!(depth, elapsed = ?tc.elapsed(), "search stopped before iteration finished");
            // A partial first iteration is still better than nothing.
            if best.is_none() {
                best = root;
            }
            break;
        }
        best = root;
        completed = depth;
        if let Some((mv, score)) = best {
            debug!(depth, score, nodes = searcher.nodes, best = %mv, "iteration complete");
        }
    }

    // Stopped before any root move finished: fall back to the first legal move.
    let (mv, score) = best.unwrap_or_else(|| (moves[0], searcher.evaluator.evaluate(&tmp)));
    Ok(SearchResult {
        best_move: Some(mv),
        score,
        depth: completed,
        nodes: searcher.nodes,
        evals: searcher.evals,
        stopped: searcher.stopped,
    })
}

/// Per-search state: counters and the stop signal.
struct Searcher<'a> {
    evaluator: &'a Evaluator,
    tc: &'a TimeControl,
    nodes: u64,
    evals: u64,
    next_clock_read: u64,
    stopped: bool,
}

impl<'a> Searcher<'a> {
    fn new(evaluator: &'a Evaluator, tc: &'a TimeControl) -> Self {
        Self {
            evaluator,
            tc,
            nodes: 0,
            evals: 0,
            next_clock_read: 0,
            stopped: false,
        }
    }

    fn should_stop(&mut self) -> bool {
        if self.stopped || self.tc.is_stopped() {
            self.stopped = true;
        } else if self.nodes >= self.next_clock_read {
            self.next_clock_read = self.nodes + self.tc.check_interval();
            self.stopped = self.tc.check_time();
        }
        self.stopped
    }

    /// Best root move and its exact score. `None` if no legal moves, or if
    /// the search stopped before the first move was fully searched.
    fn search_root(&mut self, board: &mut Board, moves: &[Move], depth: u8) -> Option<(Move, i32)> {
        let mut best: Option<(Move, i32)> = None;
        let mut alpha = -INFINITY;

        for &mv in moves {
            if self.should_stop() {
                break;
            }
            let undo = board.make_move(mv);
            let score = -self.negamax(board, depth - 1, -INFINITY, -alpha, 1);
            board.unmake_move(mv, undo);

            if self.stopped {
                break;
            }
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }
        best
    }

    fn negamax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        ply: i32,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            self.evals += 1;
            return self.evaluator.evaluate(board);
        }

        let mut moves = Vec::with_capacity(64);
        legal_moves_into(board, &mut moves);

        if moves.is_empty() {
            if board.in_check(board.side_to_move) {
                // Checkmate; nearer mates score higher for the winner.
                return -(MATE_SCORE - ply);
            }
            return 0; // Stalemate
        }

        let mut best = -INFINITY;
        for mv in moves {
            if self.should_stop() {
                break;
            }
            let undo = board.make_move(mv);
            let score = -self.negamax(board, depth - 1, -beta, -alpha, ply + 1);
            board.unmake_move(mv, undo);

            if self.stopped {
                break;
            }
            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                break; // Beta cutoff
            }
        }

        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
