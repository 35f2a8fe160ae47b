//! Named board positions, used to read and describe moves.

use super::board::{BOARD_SIZE, Board};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// A position on the tic-tac-toe board, in row-major order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (0, 0)
    TopLeft,
    /// Top-center (0, 1)
    TopCenter,
    /// Top-right (0, 2)
    TopRight,
    /// Middle-left (1, 0)
    MiddleLeft,
    /// Center (1, 1)
    Center,
    /// Middle-right (1, 2)
    MiddleRight,
    /// Bottom-left (2, 0)
    BottomLeft,
    /// Bottom-center (2, 1)
    BottomCenter,
    /// Bottom-right (2, 2)
    BottomRight,
}

impl Position {
    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses a label (case-insensitive, exact or partial) or a keypad
    /// number 1-9.
    ///
    /// A partial label must match exactly one position; `top` is rejected
    /// rather than read as `Top-left`.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let s_lower = s.to_lowercase().replace(' ', "-");
        if let Some(pos) = Position::iter().find(|pos| pos.label().to_lowercase() == s_lower) {
            return Some(pos);
        }

        let mut matches =
            Position::iter().filter(|pos| pos.label().to_lowercase().starts_with(&s_lower));
        match (matches.next(), matches.next()) {
            (Some(pos), None) => Some(pos),
            (Some(_), Some(_)) => {
                debug!(input = s, "Ambiguous position label");
                None
            }
            _ => None,
        }
    }

    /// Converts position to row-major index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Position::iter().nth(index)
    }

    /// Row and column of this position.
    pub fn to_coords(self) -> (usize, usize) {
        (self.to_index() / BOARD_SIZE, self.to_index() % BOARD_SIZE)
    }

    /// Creates position from row and column.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Self::from_index(row * BOARD_SIZE + col)
    }

    /// Returns only the positions whose square is empty.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Position::iter()
            .filter(|pos| {
                let (row, col) = pos.to_coords();
                board.is_empty(row, col)
            })
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
