//! End-to-end solver scenarios at real difficulty budgets.

use hx_core::{toggle_player, HexBoard, EMPTY, PLAYER_ONE, PLAYER_TWO};
use hx_mcts::{get_move, get_move_with, Difficulty, SearchParams};

#[test]
fn bridge_wall_stays_on_the_contested_band() {
    // Player 1's broken wall on row 2 against player 2's top presence.
    let mut board = HexBoard::new(5, 5);
    for &(r, c) in &[(2, 0), (2, 2), (2, 4)] {
        board.make_move(r, c, PLAYER_ONE);
    }
    for &(r, c) in &[(0, 0), (0, 2)] {
        board.make_move(r, c, PLAYER_TWO);
    }

    let mv = get_move(&board, PLAYER_ONE, Difficulty::Hard);
    assert!(mv >= 0);
    assert!(board.legal_moves().contains(&(mv as usize)));

    // The winning plan lives on row 2 or its bridge/repair cells in the
    // adjacent rows.
    let (r, _) = board.coord(mv as usize);
    assert!((1..=3).contains(&r), "move off the contested band: {mv}");
}

#[test]
fn forced_block_is_found_at_every_difficulty() {
    let mut board = HexBoard::new(5, 5);
    for r in 0..4 {
        board.make_move(r, 2, PLAYER_TWO);
    }
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let mv = get_move(&board, PLAYER_ONE, difficulty);
        assert_eq!(mv, board.index(4, 2) as i32, "{}", difficulty.label());
    }
}

#[test]
fn forced_win_is_found_at_every_difficulty() {
    let mut board = HexBoard::new(5, 5);
    for c in 0..4 {
        board.make_move(3, c, PLAYER_ONE);
    }
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let mv = get_move(&board, PLAYER_ONE, difficulty);
        let (r, c) = board.coord(mv as usize);

        let mut probe = board.clone();
        assert!(probe.make_move(r, c, PLAYER_ONE));
        assert_eq!(probe.check_win(), PLAYER_ONE, "{}", difficulty.label());
    }
}

#[test]
fn self_play_game_reaches_a_witnessed_win() {
    // A full AI-vs-AI game with trimmed budgets; the engine must never
    // produce an illegal move and the finished game must have a valid
    // winning chain.
    let params = SearchParams {
        time_budget_ms: [60, 60, 60],
        ..SearchParams::default()
    };

    let mut board = HexBoard::new(5, 5);
    let mut player = PLAYER_ONE;
    let mut winner = EMPTY;

    for _ply in 0..board.cell_count() {
        let (mv, _) = get_move_with(&board, player, Difficulty::Medium, &params);
        assert!(mv >= 0, "no move on an undecided board");
        assert!(board.legal_moves().contains(&(mv as usize)));

        let (r, c) = board.coord(mv as usize);
        assert!(board.make_move(r, c, player));

        winner = board.check_win();
        if winner != EMPTY {
            break;
        }
        player = toggle_player(player);
    }

    assert_ne!(winner, EMPTY, "game did not finish");
    assert_eq!(get_move(&board, toggle_player(winner), Difficulty::Easy), -1);

    let path = board.winning_path(winner);
    assert!(!path.is_empty());
    for &idx in &path {
        assert_eq!(board.cell_by_index(idx), winner);
    }
    for w in path.windows(2) {
        assert!(board.neighbors(w[0]).contains(&w[1]));
    }
}
