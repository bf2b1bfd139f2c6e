//! Disjoint-set forest (union-find) with path compression and union by rank.

/// Near-constant-amortized connectivity over a fixed universe of nodes.
///
/// Every node starts as its own root. `find`/`connected` compress paths,
/// so they take `&mut self` even though they answer a query.
#[derive(Clone)]
pub struct DisjointSet {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of `i`'s component, compressing the walked path.
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] as usize != root {
            root = self.parent[root] as usize;
        }
        // Second pass: point everything on the path at the root.
        let mut cur = i;
        while cur != root {
            let next = self.parent[cur] as usize;
            self.parent[cur] = root as u32;
            cur = next;
        }
        root
    }

    /// Merge the components of `i` and `j` (no-op if already joined).
    pub fn unite(&mut self, i: usize, j: usize) {
        let mut root_i = self.find(i);
        let mut root_j = self.find(j);
        if root_i == root_j {
            return;
        }
        if self.rank[root_i] < self.rank[root_j] {
            std::mem::swap(&mut root_i, &mut root_j);
        }
        self.parent[root_j] = root_i as u32;
        if self.rank[root_i] == self.rank[root_j] {
            self.rank[root_i] += 1;
        }
    }

    pub fn connected(&mut self, i: usize, j: usize) -> bool {
        self.find(i) == self.find(j)
    }
}
