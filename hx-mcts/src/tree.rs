//! Search-tree storage and lifecycle.
//!
//! One contiguous node pool per thread, indexed by `NodeId`. `reset`
//! truncates the pool and seeds a fresh root for the side to move; the
//! backing storage is reserved up front and survives across calls. The
//! tree also owns the soft cap, so the search loop only has to ask
//! `near_capacity` at its poll points.

use std::ops::{Index, IndexMut};

use hx_core::{toggle_player, HexBoard};

use crate::heuristics;
use crate::node::{Node, NodeId};
use crate::params::SearchParams;

/// The root is always slot zero.
pub const ROOT: NodeId = 0;

/// Nodes held in reserve below the pool cap; a search stops allocating
/// once fewer than this many slots remain.
const POOL_MARGIN: usize = 200;

pub struct SearchTree {
    nodes: Vec<Node>,
    soft_cap: usize,
}

impl SearchTree {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            soft_cap: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop the previous call's tree and seed a root for `player` to move.
    ///
    /// The root records the opponent as its mover (it "played" the move
    /// that produced the current position) and carries `board`'s legal
    /// moves, ordered so the strongest candidate pops first. The pool is
    /// reserved to the soft cap in one allocation on first use.
    pub fn reset(
        &mut self,
        board: &HexBoard,
        player: u8,
        params: &SearchParams,
        scratch: &mut Vec<(i32, u32)>,
    ) {
        self.nodes.clear();
        self.soft_cap = params.node_pool_size.saturating_sub(POOL_MARGIN);
        if self.nodes.capacity() < self.soft_cap {
            self.nodes.reserve_exact(self.soft_cap - self.nodes.capacity());
        }

        let mut root = Node::new(None, None, toggle_player(player));
        root.untried = board.legal_moves().iter().map(|&m| m as u32).collect();
        heuristics::sort_untried_moves(&mut root.untried, board, player, params, scratch);
        self.nodes.push(root);
    }

    /// True once the pool is inside the safety margin of its soft cap.
    pub fn near_capacity(&self) -> bool {
        self.nodes.len() >= self.soft_cap
    }

    /// Link a new child of `parent` reached by playing `mv`. The child's
    /// mover is the opponent of the parent's, keeping plies alternating.
    pub fn alloc_child(&mut self, parent: NodeId, mv: u32) -> NodeId {
        let mover = toggle_player(self[parent].player_who_moved);
        let id = self.nodes.len() as NodeId;
        self.nodes.push(Node::new(Some(mv), Some(parent), mover));
        self[parent].children.push(id);
        id
    }

    /// Most-visited root child as `(move, visits)`, first-seen (lowest id)
    /// winning ties. `(-1, 0)` when the root has no children.
    pub fn best_root_move(&self) -> (i32, u32) {
        if self.nodes.is_empty() {
            return (-1, 0);
        }

        let mut best: Option<(u32, i32)> = None;
        for &child_id in &self[ROOT].children {
            let child = &self[child_id];
            if best.map_or(true, |(v, _)| child.visits > v) {
                best = Some((child.visits, child.move_idx.map_or(-1, |m| m as i32)));
            }
        }

        match best {
            Some((visits, mv)) => (mv, visits),
            None => (-1, 0),
        }
    }
}

impl Default for SearchTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<NodeId> for SearchTree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }
}

impl IndexMut<NodeId> for SearchTree {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SearchParams;
    use hx_core::{HexBoard, PLAYER_ONE, PLAYER_TWO};

    fn small_tree() -> (SearchTree, HexBoard) {
        let board = HexBoard::new(3, 3);
        let mut tree = SearchTree::new();
        let mut scratch = Vec::new();
        tree.reset(&board, PLAYER_ONE, &SearchParams::default(), &mut scratch);
        (tree, board)
    }

    #[test]
    fn reset_seeds_a_root_for_the_side_to_move() {
        let (tree, board) = small_tree();
        assert_eq!(tree.len(), 1);

        let root = &tree[ROOT];
        assert_eq!(root.player_who_moved, PLAYER_TWO);
        assert_eq!(root.move_idx, None);
        assert_eq!(root.parent, None);
        assert_eq!(root.untried.len(), board.cell_count());
        // Ordered for popping: the center scores highest on an empty 3x3.
        assert_eq!(*root.untried.last().unwrap(), board.index(1, 1) as u32);
    }

    #[test]
    fn alloc_child_links_and_alternates_movers() {
        let (mut tree, _board) = small_tree();

        let a = tree.alloc_child(ROOT, 4);
        let b = tree.alloc_child(a, 0);

        assert_eq!(tree[ROOT].children, vec![a]);
        assert_eq!(tree[a].children, vec![b]);
        assert_eq!(tree[a].player_who_moved, PLAYER_ONE);
        assert_eq!(tree[b].player_who_moved, PLAYER_TWO);
        assert_eq!(tree[b].parent, Some(a));
        assert_eq!(tree[b].move_idx, Some(0));
    }

    #[test]
    fn best_root_move_takes_visits_then_first_seen() {
        let (mut tree, _board) = small_tree();
        assert_eq!(tree.best_root_move(), (-1, 0));

        let a = tree.alloc_child(ROOT, 3);
        let b = tree.alloc_child(ROOT, 5);
        let c = tree.alloc_child(ROOT, 7);
        tree[a].visits = 4;
        tree[b].visits = 9;
        tree[c].visits = 9;

        // b and c tie; b was allocated first.
        assert_eq!(tree.best_root_move(), (5, 9));
    }

    #[test]
    fn reset_reclaims_the_pool_and_tracks_the_cap() {
        let board = HexBoard::new(3, 3);
        let params = SearchParams {
            node_pool_size: 1_000,
            ..SearchParams::default()
        };
        let mut tree = SearchTree::new();
        let mut scratch = Vec::new();

        tree.reset(&board, PLAYER_ONE, &params, &mut scratch);
        assert!(!tree.near_capacity());
        while tree.len() < 800 {
            tree.alloc_child(ROOT, 0);
        }
        assert!(tree.near_capacity());

        // A fresh call reuses the pool from slot zero.
        tree.reset(&board, PLAYER_TWO, &params, &mut scratch);
        assert_eq!(tree.len(), 1);
        assert!(!tree.near_capacity());
        assert_eq!(tree[ROOT].player_who_moved, PLAYER_ONE);
    }
}
