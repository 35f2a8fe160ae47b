//! Line-oriented terminal front-end.
//!
//! Renders the board as text, reads moves from a [`MoveSource`], and drives
//! a [`Session`] round after round until input ends, the player quits, or
//! the configured number of rounds is reached.

mod input;

pub use input::{Command, LineSource, MoveSource, parse_command};

use crate::config::PlayConfig;
use crate::game::{GameOutcome, Player, Position};
use crate::session::{Phase, Session};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Results of the rounds played in one sitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds `X` won.
    pub human_wins: u32,
    /// Rounds `O` won.
    pub computer_wins: u32,
    /// Drawn rounds.
    pub draws: u32,
}

impl Scoreboard {
    /// Records a finished round.
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X) => self.human_wins += 1,
            GameOutcome::Win(Player::O) => self.computer_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Ongoing => {}
        }
    }

    /// Total finished rounds.
    pub fn rounds(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You: {}  Computer: {}  Draws: {}",
            self.human_wins, self.computer_wins, self.draws
        )
    }
}

/// A terminal game between a [`MoveSource`] and the engine.
pub struct TerminalGame<S, W> {
    session: Session,
    source: S,
    out: W,
    config: PlayConfig,
    scoreboard: Scoreboard,
}

impl<S: MoveSource, W: Write> TerminalGame<S, W> {
    /// Creates a game reading from `source` and rendering to `out`.
    pub fn new(source: S, out: W, config: PlayConfig) -> Self {
        Self {
            session: Session::new(),
            source,
            out,
            config,
            scoreboard: Scoreboard::default(),
        }
    }

    /// Plays until the source is exhausted, the player quits, or
    /// `max_rounds` rounds have finished. Returns the tally.
    #[instrument(skip(self), fields(source = %self.source.name()))]
    pub fn run(&mut self) -> Result<Scoreboard> {
        info!("Starting terminal game");
        writeln!(
            self.out,
            "You are X and move first. Enter a square as `row col`, 1-9, or a name like `center`.\n\
             `restart` starts over, `quit` leaves."
        )?;

        loop {
            if let Some(max) = self.config.max_rounds()
                && self.session.rounds_played() >= *max
            {
                debug!(max, "Round limit reached");
                break;
            }

            match self.session.phase() {
                Phase::WaitingForHuman => {
                    if !self.human_turn()? {
                        break;
                    }
                }
                Phase::WaitingForComputer => self.computer_turn()?,
                Phase::GameOver(outcome) => self.finish_round(outcome)?,
            }
        }

        writeln!(self.out, "{}", self.scoreboard)?;
        info!(rounds = self.scoreboard.rounds(), "Terminal game finished");
        Ok(self.scoreboard)
    }

    /// Handles one command. Returns `false` when the player is done.
    fn human_turn(&mut self) -> Result<bool> {
        writeln!(self.out, "\n{}\n", self.session.board())?;
        write!(self.out, "Your move: ")?;
        self.out.flush().context("Failed to flush output")?;

        match self.source.next_command()? {
            None | Some(Command::Quit) => return Ok(false),
            Some(Command::Restart) => {
                self.session.restart();
                writeln!(self.out, "Starting over.")?;
            }
            Some(Command::Unrecognized(text)) => {
                let open: Vec<_> = Position::valid_moves(self.session.board())
                    .iter()
                    .map(|p| p.label())
                    .collect();
                writeln!(self.out, "Could not read '{}' as a square.", text)?;
                writeln!(self.out, "Open squares: {}", open.join(", "))?;
            }
            Some(Command::Move(row, col)) => {
                if let Err(e) = self.session.apply_human_move(row, col) {
                    writeln!(self.out, "{}", e)?;
                }
            }
        }
        Ok(true)
    }

    fn computer_turn(&mut self) -> Result<()> {
        let reply = if *self.config.show_analysis() {
            let (reply, candidates) = self.session.analyze_and_apply_computer_move()?;
            for candidate in &candidates {
                writeln!(
                    self.out,
                    "  ({}, {}) scores {}",
                    candidate.row + 1,
                    candidate.col + 1,
                    candidate.score
                )?;
            }
            reply
        } else {
            self.session.compute_and_apply_computer_move()?
        };
        let label = Position::from_coords(reply.row, reply.col)
            .map(|p| p.label())
            .unwrap_or("?");
        writeln!(
            self.out,
            "O plays {} ({} {})",
            label,
            reply.row + 1,
            reply.col + 1
        )?;
        Ok(())
    }

    fn finish_round(&mut self, outcome: GameOutcome) -> Result<()> {
        writeln!(self.out, "\n{}\n", self.session.board())?;
        writeln!(self.out, "{}", outcome)?;
        self.scoreboard.record(outcome);

        let pause = *self.config.pause_ms();
        if pause > 0 {
            std::thread::sleep(Duration::from_millis(pause));
        }

        self.session.acknowledge()?;
        Ok(())
    }
}
