//! 0-1 BFS distance heuristic between a player's two border virtuals.

use std::collections::VecDeque;

use crate::board::{HexBoard, EMPTY, PLAYER_ONE};

/// Sentinel distance when no crossing exists.
pub const UNREACHABLE: u32 = 9999;

impl HexBoard {
    /// Fewest additional stones `player` needs to connect their two sides.
    ///
    /// Edges into own stones and virtuals cost 0, edges into empty cells
    /// cost 1, opponent cells are impassable. Returns 0 iff the player has
    /// already won, `UNREACHABLE` if the opponent has walled them off.
    pub fn shortest_distance(&self, player: u8) -> u32 {
        let graph = self.graph();
        let (start, end) = if player == PLAYER_ONE {
            (graph.left(), graph.right())
        } else {
            (graph.top(), graph.bottom())
        };

        let cell_count = self.cell_count();
        let mut dist = vec![UNREACHABLE; graph.node_count()];
        let mut dq: VecDeque<(usize, u32)> = VecDeque::new();

        dist[start] = 0;
        dq.push_front((start, 0));

        while let Some((u, d)) = dq.pop_front() {
            if u == end {
                return d;
            }
            if d > dist[u] {
                continue; // stale entry
            }
            for &v in graph.neighbors(u) {
                let weight = if v >= cell_count {
                    0
                } else if self.cell_by_index(v) == player {
                    0
                } else if self.cell_by_index(v) == EMPTY {
                    1
                } else {
                    continue; // blocked by the opponent
                };

                if dist[v] > d + weight {
                    dist[v] = d + weight;
                    if weight == 0 {
                        dq.push_front((v, dist[v]));
                    } else {
                        dq.push_back((v, dist[v]));
                    }
                }
            }
        }

        UNREACHABLE
    }
}
