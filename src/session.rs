//! Turn-by-turn driver for a human (`X`) against the engine (`O`).
//!
//! A display layer talks to the core through two calls:
//! [`Session::apply_human_move`] and
//! [`Session::compute_and_apply_computer_move`]. The session owns the board
//! and the turn token; neither lives in global state.

use crate::error::{EngineError, InvalidMoveReason};
use crate::game::{Board, COMPUTER, GameOutcome, HUMAN, Player};
use crate::search::{Candidate, analyze, best_candidate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where the session is in the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// `X` to move.
    WaitingForHuman,
    /// `O` to move.
    WaitingForComputer,
    /// The round ended; call [`Session::acknowledge`] to start the next one.
    GameOver(GameOutcome),
}

/// The engine's reply to a computer turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct ComputerMove {
    /// Row the computer played.
    pub row: usize,
    /// Column the computer played.
    pub col: usize,
    /// Outcome after the move.
    pub outcome: GameOutcome,
}

/// One game table: the board, whose turn it is, and how many rounds ended.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    phase: Phase,
    rounds_played: u32,
}

impl Session {
    /// Creates a session with an empty board and `X` to move.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new session");
        Self {
            board: Board::new(),
            phase: Phase::WaitingForHuman,
            rounds_played: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player holding the turn, or `None` once the round is over.
    pub fn to_move(&self) -> Option<Player> {
        match self.phase {
            Phase::WaitingForHuman => Some(HUMAN),
            Phase::WaitingForComputer => Some(COMPUTER),
            Phase::GameOver(_) => None,
        }
    }

    /// Number of rounds that ended and were acknowledged.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Marks `X` at `(row, col)` and reports the resulting outcome.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidMove` when the round is over, when it is
    /// the computer's turn, or when the square is off the board or taken.
    /// The session is unchanged on error.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<GameOutcome, EngineError> {
        match self.phase {
            Phase::WaitingForHuman => {}
            Phase::WaitingForComputer => {
                warn!(row, col, "Human move while computer holds the turn");
                return Err(EngineError::invalid_move(row, col, InvalidMoveReason::NotYourTurn));
            }
            Phase::GameOver(_) => {
                warn!(row, col, "Human move after the round ended");
                return Err(EngineError::invalid_move(row, col, InvalidMoveReason::GameOver));
            }
        }

        self.board.mark(row, col, HUMAN)?;
        debug!(row, col, "Human moved");
        Ok(self.advance(Phase::WaitingForComputer))
    }

    /// Searches for `O`'s best move, plays it, and returns it with the outcome.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::PreconditionViolated` if it is not the
    /// computer's turn or the board has no empty square.
    pub fn compute_and_apply_computer_move(&mut self) -> Result<ComputerMove, EngineError> {
        self.analyze_and_apply_computer_move().map(|(reply, _)| reply)
    }

    /// Like [`Session::compute_and_apply_computer_move`], but also returns
    /// every root candidate the move was chosen from, in row-major order.
    ///
    /// # Errors
    ///
    /// Same as [`Session::compute_and_apply_computer_move`].
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn analyze_and_apply_computer_move(
        &mut self,
    ) -> Result<(ComputerMove, Vec<Candidate>), EngineError> {
        if self.phase != Phase::WaitingForComputer {
            warn!("Computer asked to move out of turn");
            return Err(EngineError::precondition(format!(
                "computer cannot move in phase {:?}",
                self.phase
            )));
        }

        let candidates = analyze(&mut self.board)?;
        let (row, col) = best_candidate(&candidates)
            .best_move
            .ok_or_else(|| EngineError::precondition("search produced no move"))?;
        self.board.mark(row, col, COMPUTER)?;
        debug!(row, col, "Computer moved");

        let outcome = self.advance(Phase::WaitingForHuman);
        Ok((ComputerMove::new(row, col, outcome), candidates))
    }

    /// Leaves `GameOver`: clears the board and hands the turn to `X`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::PreconditionViolated` while a round is running.
    #[instrument(skip(self))]
    pub fn acknowledge(&mut self) -> Result<(), EngineError> {
        let Phase::GameOver(outcome) = self.phase else {
            return Err(EngineError::precondition("no finished round to acknowledge"));
        };

        self.rounds_played += 1;
        info!(%outcome, rounds_played = self.rounds_played, "Round acknowledged");
        self.board.reset();
        self.phase = Phase::WaitingForHuman;
        Ok(())
    }

    /// Abandons the current round without counting it.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting round");
        self.board.reset();
        self.phase = Phase::WaitingForHuman;
    }

    /// Moves to `next`, or to `GameOver` if the last move ended the round.
    fn advance(&mut self, next: Phase) -> GameOutcome {
        let outcome = self.board.outcome();
        if outcome.is_terminal() {
            info!(%outcome, board = %self.board.notation(), "Round over");
            self.phase = Phase::GameOver(outcome);
        } else {
            self.phase = next;
        }
        outcome
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
