//! Exhaustive minimax search for the computer player.
//!
//! The search walks the whole remaining game tree. There is no pruning and
//! no transposition table; a 3x3 board is small enough that neither pays off.

mod minimax;
mod trial;

pub use minimax::{
    Candidate, SearchResult, WIN_SCORE, analyze, best_candidate, find_best_move, minimax, search,
};
