//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X, the human side. Always moves first.
    #[display("X")]
    X,
    /// Player O, the computer side.
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Notation character used by board rendering and parsing.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// The side controlled by the person at the keyboard.
pub const HUMAN: Player = Player::X;

/// The side controlled by the search engine.
pub const COMPUTER: Player = Player::O;

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Outcome of a board, derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Moves remain and nobody has three in a row.
    Ongoing,
    /// The given player completed a line.
    Win(Player),
    /// Board is full without a line.
    Draw,
}

impl GameOutcome {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "In progress"),
            GameOutcome::Win(player) => write!(f, "{} wins!", player),
            GameOutcome::Draw => write!(f, "Draw!"),
        }
    }
}
