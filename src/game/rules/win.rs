//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};

/// The eight winning lines.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks whether `player` fully occupies any line.
///
/// Always asked for a specific player. Callers wanting "did anyone win"
/// ask once per side.
pub fn check_win(board: &Board, player: Player) -> bool {
    let mark = Some(Square::Occupied(player));
    LINES
        .iter()
        .any(|line| line.iter().all(|&(row, col)| board.get(row, col) == mark))
}
