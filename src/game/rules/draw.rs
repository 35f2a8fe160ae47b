//! Draw detection and outcome derivation for tic-tac-toe.

use super::super::{Board, GameOutcome, Player, Square};
use super::win::check_win;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().flatten().all(|s| *s != Square::Empty)
}

/// Derives the outcome by asking each side for a win, then checking fullness.
pub fn outcome(board: &Board) -> GameOutcome {
    if check_win(board, Player::X) {
        GameOutcome::Win(Player::X)
    } else if check_win(board, Player::O) {
        GameOutcome::Win(Player::O)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert_eq!(outcome(&board), GameOutcome::Ongoing);
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.mark(1, 1, Player::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(!check_win(&board, Player::X));
        assert!(!check_win(&board, Player::O));
        assert_eq!(outcome(&board), GameOutcome::Draw);
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(outcome(&board), GameOutcome::Win(Player::X));
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        // X completes the anti-diagonal with the last square.
        let board: Board = "OXX/XXO/XOO".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(outcome(&board), GameOutcome::Win(Player::X));
    }
}
