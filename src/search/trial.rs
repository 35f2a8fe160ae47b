//! Scoped trial placement used by the search.

use crate::error::EngineError;
use crate::game::{Board, Player};
use std::ops::{Deref, DerefMut};

/// A mark placed for evaluation only.
///
/// The square is emptied again when the guard drops, so every return path
/// out of a search frame (including `?`) restores the board.
pub(crate) struct TrialMove<'a> {
    board: &'a mut Board,
    row: usize,
    col: usize,
}

impl<'a> TrialMove<'a> {
    /// Places `player` at `(row, col)` until the returned guard drops.
    pub(crate) fn place(
        board: &'a mut Board,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<Self, EngineError> {
        board.mark(row, col, player)?;
        Ok(Self { board, row, col })
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.clear(self.row, self.col);
    }
}
