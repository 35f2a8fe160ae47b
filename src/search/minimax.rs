//! Depth-aware minimax over the full game tree.
//!
//! Scores are from the computer's (`O`) point of view. A win is worth
//! [`WIN_SCORE`] minus the number of plies it takes, a loss is worth the
//! negation, so among equal results the engine prefers the fastest win and
//! the slowest loss.

use super::trial::TrialMove;
use crate::error::EngineError;
use crate::game::{Board, COMPUTER, HUMAN, coords};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Score of a win found at depth 0.
pub const WIN_SCORE: i32 = 10;

/// One root move and the score the search gave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Candidate {
    /// Row of the move.
    pub row: usize,
    /// Column of the move.
    pub col: usize,
    /// Minimax score after placing `O` there.
    pub score: i32,
}

/// Best move found by [`search`] and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Minimax score of the chosen move.
    pub score: i32,
    /// The chosen `(row, col)`.
    pub best_move: Option<(usize, usize)>,
}

/// Scores `board` with `maximizing` selecting whose turn it is (`O` when
/// true, `X` otherwise).
///
/// Terminal positions are checked in order: `O` won, `X` won, board full.
/// Every trial mark is retracted before this returns.
///
/// # Errors
///
/// Returns `EngineError::PreconditionViolated` if a non-terminal position
/// yields no empty square, which the board invariants rule out.
pub fn minimax(board: &mut Board, depth: i32, maximizing: bool) -> Result<i32, EngineError> {
    if board.check_win(COMPUTER) {
        return Ok(WIN_SCORE - depth);
    }
    if board.check_win(HUMAN) {
        return Ok(depth - WIN_SCORE);
    }
    if board.is_full() {
        return Ok(0);
    }

    let player = if maximizing { COMPUTER } else { HUMAN };
    let mut best: Option<i32> = None;

    for (row, col) in coords() {
        if !board.is_empty(row, col) {
            continue;
        }

        let score = {
            let mut trial = TrialMove::place(board, row, col, player)?;
            minimax(&mut trial, depth + 1, !maximizing)?
        };

        best = Some(match best {
            None => score,
            Some(current) if maximizing => current.max(score),
            Some(current) => current.min(score),
        });
    }

    best.ok_or_else(|| {
        warn!(board = %board.notation(), depth, "Open board produced no candidates");
        EngineError::precondition(format!(
            "no empty square on non-terminal board {} at depth {}",
            board.notation(),
            depth
        ))
    })
}

/// Scores every empty square as a move for `O`, in row-major order.
///
/// Each candidate is scored by `minimax(board, 0, false)` right after the
/// trial mark, so depth 0 is the position with the candidate on it.
///
/// # Errors
///
/// Returns `EngineError::PreconditionViolated` if the board is full.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn analyze(board: &mut Board) -> Result<Vec<Candidate>, EngineError> {
    if board.is_full() {
        warn!("Search requested on a full board");
        return Err(EngineError::precondition(format!(
            "cannot search full board {}",
            board.notation()
        )));
    }

    let mut candidates = Vec::new();
    for (row, col) in coords() {
        if !board.is_empty(row, col) {
            continue;
        }

        let score = {
            let mut trial = TrialMove::place(board, row, col, COMPUTER)?;
            minimax(&mut trial, 0, false)?
        };

        debug!(row, col, score, "Scored candidate");
        candidates.push(Candidate::new(row, col, score));
    }

    Ok(candidates)
}

/// Picks the best of already scored candidates.
///
/// Ties go to the first candidate in slice order: a later candidate
/// replaces the current best only with a strictly greater score. An empty
/// slice gives `best_move: None`.
pub fn best_candidate(candidates: &[Candidate]) -> SearchResult {
    let mut result = SearchResult {
        score: i32::MIN,
        best_move: None,
    };

    for candidate in candidates {
        if result.best_move.is_none() || candidate.score > result.score {
            result = SearchResult {
                score: candidate.score,
                best_move: Some((candidate.row, candidate.col)),
            };
        }
    }

    result
}

/// Finds the best move for `O` and its score.
///
/// Candidates come from [`analyze`] in row-major order and the winner is
/// chosen by [`best_candidate`].
///
/// # Errors
///
/// Returns `EngineError::PreconditionViolated` if the board is full.
#[instrument(skip(board))]
pub fn search(board: &mut Board) -> Result<SearchResult, EngineError> {
    let result = best_candidate(&analyze(board)?);
    debug!(score = result.score, best_move = ?result.best_move, "Search complete");
    Ok(result)
}

/// Returns the `(row, col)` the computer should play.
///
/// The board is borrowed mutably for trial marks but is identical on
/// return. Applying the move is the caller's job.
///
/// # Errors
///
/// Returns `EngineError::PreconditionViolated` if the board is full.
#[instrument(skip(board))]
pub fn find_best_move(board: &mut Board) -> Result<(usize, usize), EngineError> {
    search(board)?
        .best_move
        .ok_or_else(|| EngineError::precondition("search produced no move"))
}
