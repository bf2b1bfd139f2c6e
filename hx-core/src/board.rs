//! Hex board state: cells, per-player connectivity forests, move application.
//!
//! This module is the single place that mutates board state. Win detection
//! reduces to "are this player's two border virtuals in one component",
//! maintained incrementally by `make_move`.

use std::sync::Arc;

use crate::dsu::DisjointSet;
use crate::graph::{Adjacency, VIRTUAL_NODES};

/// Cell values. Players are plain `u8` throughout the workspace.
pub const EMPTY: u8 = 0;
pub const PLAYER_ONE: u8 = 1;
pub const PLAYER_TWO: u8 = 2;

/// The opponent of `player` (1 <-> 2).
#[inline]
pub fn toggle_player(player: u8) -> u8 {
    if player == PLAYER_ONE {
        PLAYER_TWO
    } else {
        PLAYER_ONE
    }
}

/// A Hex position.
///
/// Player 1 owns the LEFT/RIGHT virtuals, player 2 TOP/BOTTOM. Cloning
/// duplicates the cells and both forests but aliases the adjacency graph,
/// so the search can copy boards freely.
#[derive(Clone)]
pub struct HexBoard {
    rows: i32,
    cols: i32,
    cells: Vec<u8>,
    dsu_one: DisjointSet,
    dsu_two: DisjointSet,
    graph: Arc<Adjacency>,
}

impl HexBoard {
    pub fn new(rows: i32, cols: i32) -> Self {
        let graph = Arc::new(Adjacency::build(rows, cols));
        let n = graph.cell_count();
        Self {
            rows,
            cols,
            cells: vec![EMPTY; n],
            dsu_one: DisjointSet::new(n + VIRTUAL_NODES),
            dsu_two: DisjointSet::new(n + VIRTUAL_NODES),
            graph,
        }
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of cells on the grid.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn graph(&self) -> &Adjacency {
        &self.graph
    }

    pub fn is_valid(&self, r: i32, c: i32) -> bool {
        r >= 0 && r < self.rows && c >= 0 && c < self.cols
    }

    /// Linear index of a valid coordinate.
    pub fn index(&self, r: i32, c: i32) -> usize {
        debug_assert!(self.is_valid(r, c));
        (r * self.cols + c) as usize
    }

    /// Coordinate of a cell index (inverse of `index`).
    pub fn coord(&self, idx: usize) -> (i32, i32) {
        let idx = idx as i32;
        (idx / self.cols, idx % self.cols)
    }

    /// Cell value at `(r, c)`, or `-1` if the coordinate is out of range.
    pub fn cell(&self, r: i32, c: i32) -> i32 {
        if !self.is_valid(r, c) {
            return -1;
        }
        self.cells[self.index(r, c)] as i32
    }

    /// Cell value by index. Defined for `idx` in `0..cell_count()`.
    pub fn cell_by_index(&self, idx: usize) -> u8 {
        self.cells[idx]
    }

    /// Neighbor list of any graph node (cells or virtuals).
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        self.graph.neighbors(idx)
    }

    /// All empty cell indices, ascending.
    pub fn legal_moves(&self) -> Vec<usize> {
        let mut legal = Vec::with_capacity(self.cells.len());
        for (i, &cell) in self.cells.iter().enumerate() {
            if cell == EMPTY {
                legal.push(i);
            }
        }
        legal
    }

    /// Place a stone for `player` at `(r, c)`.
    ///
    /// Returns false (no mutation) if the coordinate is out of range or the
    /// cell is occupied. Otherwise writes the cell and unions it, in that
    /// player's forest only, with its matching border virtuals and every
    /// same-player neighbor.
    pub fn make_move(&mut self, r: i32, c: i32, player: u8) -> bool {
        debug_assert!(player == PLAYER_ONE || player == PLAYER_TWO);

        if !self.is_valid(r, c) {
            return false;
        }
        let idx = self.index(r, c);
        if self.cells[idx] != EMPTY {
            return false;
        }
        self.cells[idx] = player;

        let graph = &self.graph;
        let cells = &self.cells;
        let dsu = if player == PLAYER_ONE {
            &mut self.dsu_one
        } else {
            &mut self.dsu_two
        };

        for &nb in graph.neighbors(idx) {
            if graph.is_virtual(nb) {
                let mine = if player == PLAYER_ONE {
                    nb == graph.left() || nb == graph.right()
                } else {
                    nb == graph.top() || nb == graph.bottom()
                };
                if mine {
                    dsu.unite(idx, nb);
                }
            } else if cells[nb] == player {
                dsu.unite(idx, nb);
            }
        }

        true
    }

    /// The winner so far: `PLAYER_ONE` iff LEFT and RIGHT share a component
    /// in player 1's forest, else `PLAYER_TWO` for TOP/BOTTOM, else `EMPTY`.
    pub fn check_win(&mut self) -> u8 {
        if self.dsu_one.connected(self.graph.left(), self.graph.right()) {
            return PLAYER_ONE;
        }
        if self.dsu_two.connected(self.graph.top(), self.graph.bottom()) {
            return PLAYER_TWO;
        }
        EMPTY
    }
}
