pub mod attacks;
pub mod board;
pub mod error;
pub mod fen;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod time_control;
pub mod types;
pub mod zobrist;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::{ChessError, Result};
pub use fen::START_FEN;
pub use movegen::*;
pub use notation::*;
pub use perft::{perft, perft_divide};
pub use time_control::*;
pub use types::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Engine trait
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score in centipawns from the side to move's perspective
    pub score: i32,
    /// Deepest fully completed iteration
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Number of static evaluations
    pub evals: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
}

/// Anything that picks a move for the side to move.
///
/// Implementations work on their own copy of the board; the caller's board
/// is never modified.
pub trait Engine: Send {
    /// Search the position within the given limits.
    ///
    /// Fails only with `CorruptPosition` when the board does not hold
    /// exactly one king per color.
    fn search(&mut self, board: &Board, limits: SearchLimits) -> Result<SearchResult>;

    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
