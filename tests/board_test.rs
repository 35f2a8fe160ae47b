//! Tests for the public board contract.

use unbeatable_tictactoe::{Board, GameOutcome, InvalidMoveReason, LINES, Player, Square};

#[test]
fn test_mark_and_query() {
    let mut board = Board::new();
    assert!(board.is_empty(2, 1));
    board.mark(2, 1, Player::X).unwrap();
    assert!(!board.is_empty(2, 1));
    assert_eq!(board.get(2, 1), Some(Square::Occupied(Player::X)));
    assert!(!board.is_full());
}

#[test]
fn test_mark_rejects_bad_targets() {
    let mut board = Board::new();
    board.mark(0, 0, Player::X).unwrap();

    let occupied = board.mark(0, 0, Player::O).unwrap_err();
    assert_eq!(occupied.invalid_move_reason(), Some(InvalidMoveReason::Occupied));

    let outside = board.mark(0, 7, Player::O).unwrap_err();
    assert_eq!(outside.invalid_move_reason(), Some(InvalidMoveReason::OutOfBounds));
}

#[test]
fn test_every_line_wins() {
    for line in LINES {
        let mut board = Board::new();
        for (row, col) in line {
            board.mark(row, col, Player::O).unwrap();
        }
        assert!(board.check_win(Player::O), "line {:?}", line);
        assert!(!board.check_win(Player::X));
        assert_eq!(board.outcome(), GameOutcome::Win(Player::O));
    }
}

#[test]
fn test_full_board_draw() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert!(board.is_full());
    assert!(!board.check_win(Player::X));
    assert!(!board.check_win(Player::O));
    assert_eq!(board.outcome(), GameOutcome::Draw);
}

#[test]
fn test_reset_after_game() {
    let mut board: Board = "XXX/OO./...".parse().unwrap();
    assert_eq!(board.outcome(), GameOutcome::Win(Player::X));
    board.reset();
    assert_eq!(board, Board::new());
    assert_eq!(board.outcome(), GameOutcome::Ongoing);
}
