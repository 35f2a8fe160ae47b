//! Error types for the game core.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum InvalidMoveReason {
    /// Coordinates fall outside the 3x3 grid.
    #[display("position is off the board")]
    OutOfBounds,
    /// The square already holds a mark.
    #[display("square is already occupied")]
    Occupied,
    /// The round is over and has not been acknowledged yet.
    #[display("game is already over")]
    GameOver,
    /// The other side holds the turn.
    #[display("it is not this player's turn")]
    NotYourTurn,
}

/// Error raised by the board, the search engine, or a session.
///
/// Both kinds are contract violations by the caller. Neither is retried.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineError {
    /// A move request the board cannot accept.
    #[display("Invalid move at ({row}, {col}): {reason}")]
    InvalidMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// What was wrong with it.
        reason: InvalidMoveReason,
    },

    /// The engine was driven into a state its contract rules out.
    #[display("Precondition violated: {}", _0)]
    PreconditionViolated(String),
}

impl std::error::Error for EngineError {}

impl EngineError {
    /// Creates an `InvalidMove` error.
    pub fn invalid_move(row: usize, col: usize, reason: InvalidMoveReason) -> Self {
        Self::InvalidMove { row, col, reason }
    }

    /// Creates a `PreconditionViolated` error.
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::PreconditionViolated(message.into())
    }

    /// Returns the rejection reason for `InvalidMove` errors.
    pub fn invalid_move_reason(&self) -> Option<InvalidMoveReason> {
        match self {
            Self::InvalidMove { reason, .. } => Some(*reason),
            Self::PreconditionViolated(_) => None,
        }
    }
}

/// Board notation could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
