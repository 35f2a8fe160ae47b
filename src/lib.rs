//! Unbeatable tic-tac-toe: a 3x3 board and an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **Board**: the grid and pure queries (`check_win`, `is_full`, ...)
//! - **Search**: depth-aware minimax that always finds a non-losing move for `O`
//! - **Session**: the two calls a display layer makes, with the turn token
//! - **Terminal**: a line-oriented front-end used by the binary
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{GameOutcome, Session};
//!
//! let mut session = Session::new();
//! assert_eq!(session.apply_human_move(1, 1)?, GameOutcome::Ongoing);
//! let reply = session.compute_and_apply_computer_move()?;
//! assert_eq!((reply.row, reply.col), (0, 0));
//! # Ok::<(), unbeatable_tictactoe::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod game;
mod search;
mod session;
pub mod terminal;

// Crate-level exports - Board state
pub use game::{
    BOARD_SIZE, Board, COMPUTER, GameOutcome, HUMAN, LINES, Player, Position, Square, coords,
};

// Crate-level exports - Search engine
pub use search::{
    Candidate, SearchResult, WIN_SCORE, analyze, best_candidate, find_best_move, minimax, search,
};

// Crate-level exports - Session interface
pub use session::{ComputerMove, Phase, Session};

// Crate-level exports - Errors and configuration
pub use config::{ConfigError, PlayConfig};
pub use error::{BoardParseError, EngineError, InvalidMoveReason};
