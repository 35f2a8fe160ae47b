//! Tic-tac-toe board state: the grid, its squares and the rules over it.

mod board;
mod position;
mod rules;
mod types;

pub use board::{BOARD_SIZE, Board, coords};
pub use position::Position;
pub use rules::LINES;
pub use types::{COMPUTER, GameOutcome, HUMAN, Player, Square};
