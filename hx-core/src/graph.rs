//! Immutable hex adjacency with four virtual border nodes.
//!
//! Node indices `0..N` are cells in row-major order; `N..N+4` are the
//! TOP, BOTTOM, LEFT, RIGHT border virtuals. The graph is built once per
//! board construction and shared read-only (behind `Arc`) by every board
//! copy the search makes.

/// Number of virtual border nodes appended after the cells.
pub const VIRTUAL_NODES: usize = 4;

/// Hex neighbor offsets, chosen by row parity.
const EVEN_ROW_OFFSETS: [(i32, i32); 6] =
    [(-1, -1), (-1, 0), (0, -1), (0, 1), (1, -1), (1, 0)];
const ODD_ROW_OFFSETS: [(i32, i32); 6] =
    [(-1, 0), (-1, 1), (0, -1), (0, 1), (1, 0), (1, 1)];

pub struct Adjacency {
    rows: i32,
    cols: i32,
    lists: Vec<Vec<usize>>,
}

impl Adjacency {
    /// Build the neighbor lists for a `rows x cols` grid.
    ///
    /// Interior cells get their six parity-dependent neighbors; cells on a
    /// border additionally link that border's virtual node (and the virtual
    /// links back, keeping the graph symmetric).
    pub fn build(rows: i32, cols: i32) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be positive");

        let n = (rows * cols) as usize;
        let mut lists: Vec<Vec<usize>> = vec![Vec::new(); n + VIRTUAL_NODES];

        let top = n;
        let bottom = n + 1;
        let left = n + 2;
        let right = n + 3;

        for r in 0..rows {
            for c in 0..cols {
                let idx = (r * cols + c) as usize;

                if r == 0 {
                    lists[idx].push(top);
                    lists[top].push(idx);
                }
                if r == rows - 1 {
                    lists[idx].push(bottom);
                    lists[bottom].push(idx);
                }
                if c == 0 {
                    lists[idx].push(left);
                    lists[left].push(idx);
                }
                if c == cols - 1 {
                    lists[idx].push(right);
                    lists[right].push(idx);
                }

                let offsets = if r % 2 == 0 {
                    &EVEN_ROW_OFFSETS
                } else {
                    &ODD_ROW_OFFSETS
                };
                for &(dr, dc) in offsets {
                    let (nr, nc) = (r + dr, c + dc);
                    if nr >= 0 && nr < rows && nc >= 0 && nc < cols {
                        lists[idx].push((nr * cols + nc) as usize);
                    }
                }
            }
        }

        Self { rows, cols, lists }
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of cells (excludes the virtuals).
    pub fn cell_count(&self) -> usize {
        (self.rows * self.cols) as usize
    }

    /// Number of graph nodes (cells plus the four virtuals).
    pub fn node_count(&self) -> usize {
        self.lists.len()
    }

    pub fn top(&self) -> usize {
        self.cell_count()
    }

    pub fn bottom(&self) -> usize {
        self.cell_count() + 1
    }

    pub fn left(&self) -> usize {
        self.cell_count() + 2
    }

    pub fn right(&self) -> usize {
        self.cell_count() + 3
    }

    pub fn is_virtual(&self, idx: usize) -> bool {
        idx >= self.cell_count()
    }

    pub fn neighbors(&self, idx: usize) -> &[usize] {
        &self.lists[idx]
    }
}
