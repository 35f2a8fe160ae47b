//! The 3x3 grid and its queries.

use super::rules;
use super::types::{GameOutcome, Player, Square};
use crate::error::{BoardParseError, EngineError, InvalidMoveReason};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, warn};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Every coordinate in row-major scan order.
pub fn coords() -> impl Iterator<Item = (usize, usize)> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
}

/// 3x3 tic-tac-toe board, addressed by `(row, col)`.
///
/// The board does not know whose turn it is. Callers that need the
/// X-first alternation enforced go through [`crate::Session`].
///
/// Serializes as its notation string, and deserializing goes through
/// [`FromStr`] so the mark counts are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    /// Squares in row-major order.
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Gets the square at the given position, `None` when off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        self.squares.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[[Square; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    /// Places `player`'s mark on an empty square.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidMove` if the position is off the board
    /// or already occupied. The board is left untouched in that case.
    pub fn mark(&mut self, row: usize, col: usize, player: Player) -> Result<(), EngineError> {
        match self.get(row, col) {
            None => {
                warn!(row, col, %player, "Rejected mark off the board");
                Err(EngineError::invalid_move(row, col, InvalidMoveReason::OutOfBounds))
            }
            Some(Square::Occupied(_)) => {
                warn!(row, col, %player, "Rejected mark on occupied square");
                Err(EngineError::invalid_move(row, col, InvalidMoveReason::Occupied))
            }
            Some(Square::Empty) => {
                self.squares[row][col] = Square::Occupied(player);
                Ok(())
            }
        }
    }

    /// Empties a square. Only search retraction needs this.
    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        if let Some(square) = self.squares.get_mut(row).and_then(|r| r.get_mut(col)) {
            *square = Square::Empty;
        }
    }

    /// Checks if a square is empty. Off-board positions are never empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Square::Empty))
    }

    /// Checks if no empty square remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks whether `player` owns a complete row, column or diagonal.
    pub fn check_win(&self, player: Player) -> bool {
        rules::check_win(self, player)
    }

    /// Derives the outcome of the current position.
    pub fn outcome(&self) -> GameOutcome {
        rules::outcome(self)
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [[Square::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Empty squares in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        coords().filter(|&(row, col)| self.is_empty(row, col))
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// True when X has made as many moves as O or exactly one more.
    pub fn is_consistent(&self) -> bool {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        x == o || x == o + 1
    }

    /// Compact notation: nine characters of `X`, `O` and `.`, row-major.
    pub fn notation(&self) -> String {
        self.squares
            .iter()
            .flatten()
            .map(|square| match square {
                Square::Empty => '.',
                Square::Occupied(player) => player.symbol(),
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the grid with empty squares numbered 1-9 for keyboard entry.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.iter().enumerate() {
            for (col, square) in cells.iter().enumerate() {
                match square {
                    Square::Empty => write!(f, "{}", row * BOARD_SIZE + col + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player.symbol())?,
                }
                if col < BOARD_SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < BOARD_SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses [`Board::notation`], ignoring whitespace and `|`/`/` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();

        if symbols.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(BoardParseError::new(format!(
                "expected 9 squares, found {}",
                symbols.len()
            )));
        }

        let mut board = Board::new();
        for ((row, col), symbol) in coords().zip(symbols) {
            board.squares[row][col] = match symbol.to_ascii_uppercase() {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                other => {
                    return Err(BoardParseError::new(format!(
                        "unexpected symbol '{}'",
                        other
                    )));
                }
            };
        }

        if !board.is_consistent() {
            return Err(BoardParseError::new(format!(
                "X has {} marks and O has {}; X moves first and turns alternate",
                board.count(Player::X),
                board.count(Player::O)
            )));
        }

        Ok(board)
    }
}

impl TryFrom<String> for Board {
    type Error = BoardParseError;

    fn try_from(notation: String) -> Result<Self, Self::Error> {
        notation.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.notation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for (row, col) in coords() {
            assert_eq!(board.get(row, col), Some(Square::Empty));
            assert!(board.is_empty(row, col));
        }
        assert_eq!(board.empty_cells().count(), 9);
    }

    #[test]
    fn test_mark_sets_square() {
        let mut board = Board::new();
        board.mark(1, 2, Player::X).unwrap();
        assert_eq!(board.get(1, 2), Some(Square::Occupied(Player::X)));
        assert!(!board.is_empty(1, 2));
        assert_eq!(board.count(Player::X), 1);
    }

    #[test]
    fn test_mark_occupied_rejected() {
        let mut board = Board::new();
        board.mark(0, 0, Player::X).unwrap();
        let err = board.mark(0, 0, Player::O).unwrap_err();
        assert_eq!(err.invalid_move_reason(), Some(InvalidMoveReason::Occupied));
        assert_eq!(board.get(0, 0), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_mark_out_of_bounds_rejected() {
        let mut board = Board::new();
        let err = board.mark(3, 0, Player::X).unwrap_err();
        assert_eq!(err.invalid_move_reason(), Some(InvalidMoveReason::OutOfBounds));
        assert!(!board.is_empty(0, 3));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board: Board = "XOX/OXO/...".parse().unwrap();
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        let cells: Vec<_> = board.empty_cells().collect();
        assert_eq!(cells, vec![(0, 1), (1, 0), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_notation_round_trip() {
        let board: Board = "xo. | .x. | o..".parse().unwrap();
        assert_eq!(board.notation(), "XO..X.O..");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!("XO".parse::<Board>().is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let err = "XO?......".parse::<Board>().unwrap_err();
        assert!(err.message.contains('?'));
    }

    #[test]
    fn test_parse_rejects_inconsistent_counts() {
        assert!("XX.......".parse::<Board>().is_err());
        assert!("O........".parse::<Board>().is_err());
    }

    #[test]
    fn test_serde_uses_notation() {
        let board: Board = "XO./.X./...".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "\"XO..X....\"");
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_counts() {
        assert!(serde_json::from_str::<Board>("\"OO.......\"").is_err());
        assert!(serde_json::from_str::<Board>("\"XXXX.....\"").is_err());
    }
}
