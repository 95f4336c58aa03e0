//! Batch analysis of a list of positions.

use pig_chess_core::{Board, Move, Result};
use serde::Serialize;
use tracing::info;

use crate::config::EngineConfig;
use crate::eval::Evaluator;
use crate::search::search;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteEntry {
    pub fen: String,
    #[serde(serialize_with = "serialize_move")]
    pub best_move: Option<Move>,
    pub score: i32,
    pub nodes: u64,
}

fn serialize_move<S>(mv: &Option<Move>, s: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match mv {
        Some(mv) => s.serialize_some(&mv.to_string()),
        None => s.serialize_none(),
    }
}

/// Search every position to `depth`. Stops at the first FEN that does not
/// parse or holds a corrupt position.
pub fn run_suite(fens: &[&str], depth: u8, config: &EngineConfig) -> Result<Vec<SuiteEntry>> {
    let evaluator = Evaluator::new(config.positional);
    let mut entries = Vec::with_capacity(fens.len());

    for (i, fen) in fens.iter().enumerate() {
        let board = Board::from_fen(fen)?;
        let result = search(&board, &config.limits(depth), &evaluator)?;
        info!(
            position = i + 1,
            total = fens.len(),
            best = ?result.best_move.map(|m| m.to_string()),
            score = result.score,
            nodes = result.nodes,
            "suite position done"
        );
        entries.push(SuiteEntry {
            fen: board.to_fen(),
            best_move: result.best_move,
            score: result.score,
            nodes: result.nodes,
        });
    }
    Ok(entries)
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod suite_tests;
