//! Classical Chess Engine
//!
//! Negamax search with alpha-beta pruning over a material evaluation with
//! optional piece-square bonuses, plus a [`Game`] session that commits moves,
//! keeps history for takeback and detects game end.

mod config;
mod eval;
mod game;
mod search;
mod suite;

use pig_chess_core::{Board, Engine, Result, SearchLimits, SearchResult};

pub use config::{EngineConfig, MAX_LEVEL};
pub use eval::{Evaluator, MATE_SCORE, evaluate, piece_value};
pub use game::{Game, GameStatus, HistoryEntry, level_to_depth};
pub use search::{INFINITY, find_best_move, search};
pub use suite::{SuiteEntry, run_suite};

/// Classical chess engine using negamax with alpha-beta pruning.
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    evaluator: Evaluator,
    /// Nodes visited since the last `new_game`
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new(evaluator: Evaluator) -> Self {
        Self { evaluator, nodes: 0 }
    }

    pub fn total_nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &Board, limits: SearchLimits) -> Result<SearchResult> {
        let result = search::search(board, &limits, &self.evaluator)?;
        self.nodes += result.nodes;
        Ok(result)
    }

    fn name(&self) -> &str {
        if self.evaluator.is_positional() {
            "Classical (material + tables)"
        } else {
            "Classical (material)"
        }
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
