//! Move-ordering and bridge tactics.

use hx_core::{HexBoard, EMPTY};

use crate::params::SearchParams;

/// Relative cells that form a bridge with a stone placed at the origin.
const BRIDGE_OFFSETS: [(i32, i32); 6] = [(-1, -1), (-1, 2), (1, -2), (1, 1), (-2, 1), (2, -1)];

/// Largest possible neighborhood of a cell; bounds the bridge-save scan.
const MAX_NEIGHBORS: usize = 6;

/// True iff playing `(r, c)` forms a bridge with an existing `player` stone.
pub fn is_bridge_move(board: &HexBoard, r: i32, c: i32, player: u8) -> bool {
    for &(dr, dc) in &BRIDGE_OFFSETS {
        let (tr, tc) = (r + dr, c + dc);
        if board.is_valid(tr, tc) && board.cell(tr, tc) == player as i32 {
            return true;
        }
    }
    false
}

/// Sort `moves` ascending by heuristic score, so the strongest candidate
/// sits at the back ready to be popped. Scoring: center bias minus a
/// Manhattan-distance penalty, plus a large bonus for bridge formation.
pub fn sort_untried_moves(
    moves: &mut [u32],
    board: &HexBoard,
    player: u8,
    params: &SearchParams,
    scratch: &mut Vec<(i32, u32)>,
) {
    if moves.is_empty() {
        return;
    }

    scratch.clear();
    let center_r = board.rows() / 2;
    let center_c = board.cols() / 2;

    for &m in moves.iter() {
        let (r, c) = board.coord(m as usize);
        let dist = (r - center_r).abs() + (c - center_c).abs();
        let mut score = params.center_bias - dist * params.dist_penalty;
        if is_bridge_move(board, r, c, player) {
            score += params.bridge_build;
        }
        scratch.push((score, m));
    }

    scratch.sort_unstable_by_key(|&(score, _)| score);

    for (slot, &(_, m)) in moves.iter_mut().zip(scratch.iter()) {
        *slot = m;
    }
}

/// Smallest empty cell adjacent to both `u` and `v`, other than
/// `exclude`. This is the repair cell of an intruded bridge.
fn common_empty_neighbor(board: &HexBoard, u: usize, v: usize, exclude: usize) -> Option<usize> {
    let n = board.cell_count();
    let mut best: Option<usize> = None;

    for &cand in board.neighbors(u) {
        if cand >= n || cand == exclude || board.cell_by_index(cand) != EMPTY {
            continue;
        }
        if board.neighbors(v).contains(&cand) && best.map_or(true, |b| cand < b) {
            best = Some(cand);
        }
    }

    best
}

/// If the opponent's stone at `last_move` intruded a bridge between two
/// `defender` stones, return the still-empty repair cell.
///
/// Friendly stones adjacent to the intrusion are scanned pairwise in
/// ascending index order; the first pair with a repair cell wins.
pub fn bridge_save_move(board: &HexBoard, last_move: usize, defender: u8) -> Option<usize> {
    let n = board.cell_count();

    let mut friendly = [0usize; MAX_NEIGHBORS];
    let mut count = 0;
    for &nb in board.neighbors(last_move) {
        if nb < n && board.cell_by_index(nb) == defender {
            debug_assert!(count < MAX_NEIGHBORS, "cell with more than six neighbors");
            friendly[count] = nb;
            count += 1;
        }
    }
    if count < 2 {
        return None;
    }
    friendly[..count].sort_unstable();

    for i in 0..count {
        for j in (i + 1)..count {
            if let Some(repair) =
                common_empty_neighbor(board, friendly[i], friendly[j], last_move)
            {
                return Some(repair);
            }
        }
    }

    None
}
