use hx_core::{HexBoard, PLAYER_ONE, PLAYER_TWO};

use crate::context::reseed;
use crate::mcts::{get_move, get_move_with};
use crate::params::{Difficulty, SearchParams};

fn quick_params() -> SearchParams {
    SearchParams {
        time_budget_ms: [50, 50, 50],
        ..SearchParams::default()
    }
}

#[test]
fn decided_board_returns_no_move() {
    let mut board = HexBoard::new(3, 3);
    for c in 0..3 {
        board.make_move(0, c, PLAYER_ONE);
    }
    assert_eq!(get_move(&board, PLAYER_TWO, Difficulty::Easy), -1);
    assert_eq!(get_move(&board, PLAYER_ONE, Difficulty::Hard), -1);
}

#[test]
fn one_ply_win_is_taken_without_searching() {
    // Player 1 chain LEFT..(2,3); (2,4) completes it.
    let mut board = HexBoard::new(5, 5);
    for c in 0..4 {
        board.make_move(2, c, PLAYER_ONE);
    }
    let (mv, report) = get_move_with(&board, PLAYER_ONE, Difficulty::Hard, &quick_params());
    assert_eq!(mv, board.index(2, 4) as i32);
    assert_eq!(report.iterations, 0);
    assert_eq!(report.nodes, 0);
}

#[test]
fn opponent_one_ply_win_is_blocked() {
    // Player 2 column threatens (4,2)/(4,3); the scan blocks the lowest.
    let mut board = HexBoard::new(5, 5);
    for r in 0..4 {
        board.make_move(r, 2, PLAYER_TWO);
    }
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let (mv, _) = get_move_with(&board, PLAYER_ONE, difficulty, &quick_params());
        assert_eq!(mv, board.index(4, 2) as i32);
    }
}

#[test]
fn own_win_is_preferred_over_blocking() {
    // (1,4) simultaneously completes player 1's row and player 2's
    // column. The win scan claims it before the block scan would.
    let mut board = HexBoard::new(5, 5);
    for c in 0..4 {
        board.make_move(1, c, PLAYER_ONE);
    }
    for &r in &[0, 2, 3, 4] {
        board.make_move(r, 4, PLAYER_TWO);
    }
    let (mv, _) = get_move_with(&board, PLAYER_ONE, Difficulty::Easy, &quick_params());
    assert_eq!(mv, board.index(1, 4) as i32);

    let (r, c) = board.coord(mv as usize);
    assert!(board.make_move(r, c, PLAYER_ONE));
    assert_eq!(board.check_win(), PLAYER_ONE);
}

#[test]
fn searched_move_is_legal() {
    reseed(0xC0FFEE);
    let mut board = HexBoard::new(5, 5);
    board.make_move(2, 2, PLAYER_ONE);
    board.make_move(1, 2, PLAYER_TWO);

    let (mv, report) = get_move_with(&board, PLAYER_ONE, Difficulty::Medium, &quick_params());
    assert!(mv >= 0);
    assert!(board.legal_moves().contains(&(mv as usize)));
    assert!(report.iterations > 0);
    assert!(report.nodes > 0);
    assert!(report.best_visits > 0);
}

#[test]
fn pool_cap_stops_the_search_early() {
    let params = SearchParams {
        // Generous budget, tiny pool: the pool check must end the run.
        time_budget_ms: [5_000, 5_000, 5_000],
        node_pool_size: 1_000,
        ..SearchParams::default()
    };
    let board = HexBoard::new(7, 7);
    let (mv, report) = get_move_with(&board, PLAYER_ONE, Difficulty::Hard, &params);

    assert!(mv >= 0);
    assert!(board.legal_moves().contains(&(mv as usize)));
    // Poll granularity is 256 iterations, so allow one batch of overshoot.
    assert!(report.nodes < 1_100, "nodes={}", report.nodes);
    assert!(report.elapsed.as_millis() < 5_000);
}

#[test]
fn tactical_scan_prefers_the_lowest_index() {
    // Two disjoint one-ply wins for player 2: (1,0) finishes the left
    // column, (1,2) the right one. The scan returns the smaller index.
    let mut board = HexBoard::new(3, 3);
    for &(r, c) in &[(0, 0), (2, 0), (0, 2), (2, 2)] {
        board.make_move(r, c, PLAYER_TWO);
    }
    let (mv, _) = get_move_with(&board, PLAYER_TWO, Difficulty::Easy, &quick_params());
    assert_eq!(mv, board.index(1, 0) as i32);
}
