//! Error types for board setup, move input and position invariants.

use thiserror::Error;

use crate::types::Move;

/// Errors surfaced by the chess core and the engines built on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// FEN or piece-placement input could not be turned into a position.
    #[error("invalid position: {reason}")]
    InvalidPosition { reason: String },

    /// Move text does not name two on-board coordinates.
    #[error("malformed move '{text}': {reason}")]
    MalformedMove { text: String, reason: String },

    /// Well-formed move that is not legal in the current position.
    #[error("illegal move: {mv}")]
    IllegalMove { mv: Move },

    /// Internal invariant broken (zero or several kings of one color).
    #[error("corrupt position: {reason}")]
    CorruptPosition { reason: String },

    /// Takeback requested with no applied moves.
    #[error("no move to take back")]
    NothingToUndo,

    /// Engine configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ChessError {
    pub(crate) fn invalid_position(reason: impl Into<String>) -> Self {
        ChessError::InvalidPosition {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_move(text: &str, reason: impl Into<String>) -> Self {
        ChessError::MalformedMove {
            text: text.to_string(),
            reason: reason.into(),
        }
    }

    /// Parsing and legality errors can be handled by asking for new input;
    /// a corrupt position means a bug in move application.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ChessError::CorruptPosition { .. })
    }
}

/// Result type alias for chess core operations
pub type Result<T> = std::result::Result<T, ChessError>;
