//! Solver entry point and the RAVE-UCT search loop.

use std::time::{Duration, Instant};

use hx_core::{toggle_player, HexBoard, EMPTY};

use crate::context::{with_context, SearchContext};
use crate::heuristics;
use crate::node::NodeId;
use crate::params::{Difficulty, SearchParams};
use crate::tree::{SearchTree, ROOT};

/// Deadline and pool checks happen once per this many iterations.
const POLL_MASK: u32 = 0xFF;
/// Keeps the RAVE-UCT ratios finite on unvisited children.
const EPS: f64 = 1e-9;

/// Telemetry from one solver call.
#[derive(Debug, Clone, Default)]
pub struct SearchReport {
    /// Completed search iterations (0 when a tactical shortcut fired).
    pub iterations: u32,
    /// Nodes in the tree when the call returned.
    pub nodes: usize,
    pub elapsed: Duration,
    /// Visit count of the chosen root child.
    pub best_visits: u32,
}

/// Best move for `player` on `board`, or `-1` if the position is decided
/// or full. Uses the stock parameters for `difficulty`.
pub fn get_move(board: &HexBoard, player: u8, difficulty: Difficulty) -> i32 {
    get_move_with(board, player, difficulty, &SearchParams::default()).0
}

/// As `get_move`, with explicit parameters and the search telemetry.
pub fn get_move_with(
    board: &HexBoard,
    player: u8,
    difficulty: Difficulty,
    params: &SearchParams,
) -> (i32, SearchReport) {
    with_context(|ctx| solve(ctx, board, player, difficulty, params))
}

fn solve(
    ctx: &mut SearchContext,
    board: &HexBoard,
    player: u8,
    difficulty: Difficulty,
    params: &SearchParams,
) -> (i32, SearchReport) {
    let started = Instant::now();
    let mut report = SearchReport::default();

    // A decided game has no move to make.
    if board.clone().check_win() != EMPTY {
        report.elapsed = started.elapsed();
        return (-1, report);
    }

    let legal = board.legal_moves();
    if legal.is_empty() {
        report.elapsed = started.elapsed();
        return (-1, report);
    }

    let opponent = toggle_player(player);

    // One-ply win for us, then one-ply win for the opponent (block), each
    // scanned in ascending index order on private board copies.
    for who in [player, opponent] {
        if let Some(m) = instant_win(board, &legal, who) {
            report.elapsed = started.elapsed();
            return (m as i32, report);
        }
    }

    ctx.ensure_capacity(board.cell_count());

    let rave_bias = params.rave_bias_for(difficulty);
    let deadline = started + params.time_budget(difficulty);

    ctx.tree.reset(board, player, params, &mut ctx.sort_scratch);

    let mut iterations: u32 = 0;
    loop {
        if (iterations & POLL_MASK) == 0
            && (Instant::now() >= deadline || ctx.tree.near_capacity())
        {
            break;
        }

        let mut node_id: NodeId = ROOT;
        let mut working = board.clone();

        // Selection: descend while fully expanded and non-leaf, replaying
        // each chosen child's move onto the working board.
        loop {
            let node = &ctx.tree[node_id];
            if !node.untried.is_empty() || node.children.is_empty() {
                break;
            }
            let Some(child) = select_child(&ctx.tree, node_id, rave_bias, params.uct_exploration)
            else {
                break;
            };
            node_id = child;
            let node = &ctx.tree[node_id];
            if let Some(m) = node.move_idx {
                let (r, c) = working.coord(m as usize);
                working.make_move(r, c, node.player_who_moved);
            }
        }

        // Expansion: pop the highest-priority untried move.
        if let Some(mv) = ctx.tree[node_id].untried.pop() {
            node_id = expand(
                &mut ctx.tree,
                &mut ctx.sort_scratch,
                node_id,
                mv,
                &mut working,
                params,
            );
        }

        // Playout from the opponent of the leaf's mover.
        let sim_player = toggle_player(ctx.tree[node_id].player_who_moved);
        let winner = ctx.sim.run(&mut working, sim_player, &mut ctx.rng);

        backpropagate(
            &mut ctx.tree,
            &mut ctx.rave_lookup,
            ctx.sim.winner_moves(winner),
            node_id,
            winner,
        );

        iterations += 1;
    }

    let (best_move, best_visits) = ctx.tree.best_root_move();

    report.iterations = iterations;
    report.nodes = ctx.tree.len();
    report.elapsed = started.elapsed();
    report.best_visits = best_visits;

    (best_move, report)
}

/// Lowest-index move that wins the game for `who` when played now.
fn instant_win(board: &HexBoard, legal: &[usize], who: u8) -> Option<usize> {
    for &m in legal {
        let mut probe = board.clone();
        let (r, c) = probe.coord(m);
        probe.make_move(r, c, who);
        if probe.check_win() == who {
            return Some(m);
        }
    }
    None
}

/// RAVE-UCT child selection.
///
/// Each child's value is a beta-weighted blend of its own win rate and its
/// AMAF win rate; beta decays toward 0 as real visits accumulate, faster
/// for larger `rave_bias`. An unvisited child is scored purely by AMAF.
fn select_child(
    tree: &SearchTree,
    node_id: NodeId,
    rave_bias: f64,
    exploration: f64,
) -> Option<NodeId> {
    let node = &tree[node_id];
    let log_visits = (node.visits as f64 + 1.0).ln();

    let mut best_score = f64::NEG_INFINITY;
    let mut best_child = None;

    for &child_id in &node.children {
        let child = &tree[child_id];

        let v = child.visits as f64 + EPS;
        let rv = child.rave_visits + EPS;
        let w = child.wins / v;
        let rw = child.rave_wins / rv;

        let beta = if child.visits == 0 {
            1.0
        } else {
            rv / (rv + v + rave_bias * v * w)
        };
        let q = (1.0 - beta) * w + beta * rw;
        let explore = exploration * (log_visits / v).sqrt();
        let score = q + explore;

        if score > best_score {
            best_score = score;
            best_child = Some(child_id);
        }
    }

    best_child
}

/// Grow the tree by `mv`, apply it to `board`, and seed the child's
/// ordered untried list unless the position is terminal.
fn expand(
    tree: &mut SearchTree,
    scratch: &mut Vec<(i32, u32)>,
    parent: NodeId,
    mv: u32,
    board: &mut HexBoard,
    params: &SearchParams,
) -> NodeId {
    let child_id = tree.alloc_child(parent, mv);
    let mover = tree[child_id].player_who_moved;

    let (r, c) = board.coord(mv as usize);
    board.make_move(r, c, mover);

    if board.check_win() == EMPTY {
        let mut untried: Vec<u32> = board.legal_moves().iter().map(|&m| m as u32).collect();
        heuristics::sort_untried_moves(&mut untried, board, toggle_player(mover), params, scratch);
        tree[child_id].untried = untried;
    }

    child_id
}

/// Walk leaf-to-root incrementing visit/win counts, and credit every
/// sibling-level child whose move appears in the winner's playout (AMAF).
fn backpropagate(
    tree: &mut SearchTree,
    rave_lookup: &mut [bool],
    winning_moves: &[u32],
    leaf: NodeId,
    winner: u8,
) {
    rave_lookup.fill(false);
    for &m in winning_moves {
        rave_lookup[m as usize] = true;
    }

    let mut cursor = Some(leaf);
    while let Some(node_id) = cursor {
        {
            let node = &mut tree[node_id];
            node.visits += 1;
            if node.player_who_moved == winner {
                node.wins += 1.0;
            }
        }

        for i in 0..tree[node_id].children.len() {
            let child_id = tree[node_id].children[i];
            let child = &mut tree[child_id];
            if let Some(m) = child.move_idx {
                if rave_lookup[m as usize] {
                    child.rave_visits += 1.0;
                    if child.player_who_moved == winner {
                        child.rave_wins += 1.0;
                    }
                }
            }
        }

        cursor = tree[node_id].parent;
    }
}

/// Bench hook: exposes child selection without the rest of the loop.
pub fn bench_select_child(
    tree: &SearchTree,
    node_id: NodeId,
    rave_bias: f64,
    exploration: f64,
) -> Option<NodeId> {
    select_child(tree, node_id, rave_bias, exploration)
}
