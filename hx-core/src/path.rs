//! Winning-chain recovery after a decided game.

use crate::board::{HexBoard, PLAYER_ONE, PLAYER_TWO};

impl HexBoard {
    /// One ordered chain of `player`'s stones witnessing their win.
    ///
    /// DFS over the same-player subgraph (virtuals skipped), starting from
    /// every cell on the player's starting edge, returning the first path
    /// that reaches the opposite edge in pre-order. Empty if the player has
    /// not connected their sides.
    pub fn winning_path(&self, player: u8) -> Vec<usize> {
        let mut visited = vec![false; self.cell_count()];
        let mut path = Vec::new();

        if player == PLAYER_ONE {
            for r in 0..self.rows() {
                let idx = self.index(r, 0);
                if self.cell_by_index(idx) == player
                    && self.dfs_chain(idx, player, &mut visited, &mut path)
                {
                    return path;
                }
            }
        } else {
            for c in 0..self.cols() {
                let idx = self.index(0, c);
                if self.cell_by_index(idx) == player
                    && self.dfs_chain(idx, player, &mut visited, &mut path)
                {
                    return path;
                }
            }
        }

        Vec::new()
    }

    fn dfs_chain(
        &self,
        idx: usize,
        player: u8,
        visited: &mut [bool],
        path: &mut Vec<usize>,
    ) -> bool {
        visited[idx] = true;
        path.push(idx);

        let (r, c) = self.coord(idx);
        let reached_far_edge = (player == PLAYER_ONE && c == self.cols() - 1)
            || (player == PLAYER_TWO && r == self.rows() - 1);
        if reached_far_edge {
            return true;
        }

        for &nb in self.neighbors(idx) {
            if nb >= self.cell_count() {
                continue;
            }
            if self.cell_by_index(nb) == player
                && !visited[nb]
                && self.dfs_chain(nb, player, visited, path)
            {
                return true;
            }
        }

        path.pop();
        false
    }
}
