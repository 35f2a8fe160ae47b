//! Whole-tree properties of the search engine, driven through the public API.

use unbeatable_tictactoe::{
    Board, GameOutcome, Player, Session, Square, WIN_SCORE, analyze, coords, find_best_move,
    search,
};

#[derive(Debug, Default)]
struct Tally {
    computer_wins: u32,
    draws: u32,
    replies: u32,
}

/// Plays every legal X sequence against the engine.
fn explore(session: &Session, tally: &mut Tally) {
    let open: Vec<_> = session.board().empty_cells().collect();
    for (row, col) in open {
        let mut next = session.clone();
        match next.apply_human_move(row, col).unwrap() {
            GameOutcome::Ongoing => {}
            GameOutcome::Draw => {
                tally.draws += 1;
                continue;
            }
            outcome => panic!("X reached {:?} on {}", outcome, next.board().notation()),
        }

        let before = *next.board();
        let reply = next.compute_and_apply_computer_move().unwrap();
        tally.replies += 1;

        // Only the chosen square changed, and it was empty before.
        let after = *next.board();
        for (r, c) in coords() {
            if (r, c) == (reply.row, reply.col) {
                assert_eq!(before.get(r, c), Some(Square::Empty));
                assert_eq!(after.get(r, c), Some(Square::Occupied(Player::O)));
            } else {
                assert_eq!(before.get(r, c), after.get(r, c));
            }
        }

        match reply.outcome {
            GameOutcome::Ongoing => explore(&next, tally),
            GameOutcome::Win(Player::O) => tally.computer_wins += 1,
            GameOutcome::Draw => tally.draws += 1,
            GameOutcome::Win(Player::X) => panic!("O lost on {}", after.notation()),
        }
    }
}

#[test]
fn test_computer_never_loses() {
    let mut tally = Tally::default();
    explore(&Session::new(), &mut tally);

    assert!(tally.replies > 0);
    assert!(tally.computer_wins > 0, "{:?}", tally);
    assert!(tally.draws > 0, "{:?}", tally);
}

#[test]
fn test_empty_board_opens_top_left() {
    let mut board = Board::new();
    let result = search(&mut board).unwrap();
    assert_eq!(result.best_move, Some((0, 0)));
    assert_eq!(result.score, 0);
}

#[test]
fn test_every_opening_draws() {
    let mut board = Board::new();
    let candidates = analyze(&mut board).unwrap();
    assert_eq!(candidates.len(), 9);
    assert!(candidates.iter().all(|c| c.score == 0));
    assert_eq!(board, Board::new());
}

#[test]
fn test_immediate_win_ends_the_game() {
    let mut board: Board = "OX./XO./.X.".parse().unwrap();
    let (row, col) = find_best_move(&mut board).unwrap();
    assert_eq!((row, col), (2, 2));

    board.mark(row, col, Player::O).unwrap();
    assert_eq!(board.outcome(), GameOutcome::Win(Player::O));
}

#[test]
fn test_blocks_column_threat() {
    // X owns (0,2) and (1,2); O has a single mark and no win.
    let mut board: Board = "..X/.OX/...".parse().unwrap();
    assert_eq!(find_best_move(&mut board).unwrap(), (2, 2));
}

#[test]
fn test_search_is_side_effect_free() {
    for notation in ["X........", "X../.O./..X", "XO./.X./...", "XOX/.O./.X."] {
        let mut board: Board = notation.parse().unwrap();
        let before = board;
        let result = search(&mut board).unwrap();
        assert_eq!(board, before, "search changed {}", notation);
        assert!(result.score.abs() <= WIN_SCORE);
    }
}
