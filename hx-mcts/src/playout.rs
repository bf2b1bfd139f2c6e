//! Light playout with a bridge-save policy.

use hx_core::{toggle_player, HexBoard, EMPTY, PLAYER_ONE, PLAYER_TWO};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::heuristics;

/// Reusable playout buffers: the legal-move set as a vector plus an
/// inverse position map (swap-and-pop removal in O(1)), and per-player
/// move histories feeding the RAVE update.
pub struct SimBuffers {
    sim_moves: Vec<u32>,
    sim_move_pos: Vec<i32>,
    p1_moves: Vec<u32>,
    p2_moves: Vec<u32>,
}

impl SimBuffers {
    pub fn new() -> Self {
        Self {
            sim_moves: Vec::with_capacity(400),
            sim_move_pos: vec![-1; 400],
            p1_moves: Vec::with_capacity(200),
            p2_moves: Vec::with_capacity(200),
        }
    }

    /// Grow the position map to cover `n` cells. Never shrinks.
    pub fn ensure_capacity(&mut self, n: usize) {
        if self.sim_move_pos.len() < n {
            self.sim_move_pos.resize(n, -1);
        }
    }

    /// The moves the given playout winner made, for AMAF credit.
    pub fn winner_moves(&self, winner: u8) -> &[u32] {
        match winner {
            PLAYER_ONE => &self.p1_moves,
            PLAYER_TWO => &self.p2_moves,
            _ => &[],
        }
    }

    /// Play random moves on `board` until someone wins, `current_player`
    /// first. Each turn first tries to repair a bridge the previous
    /// (opponent) move intruded; otherwise picks uniformly at random.
    /// Returns the winner.
    pub fn run(&mut self, board: &mut HexBoard, mut current_player: u8, rng: &mut ChaCha8Rng) -> u8 {
        self.p1_moves.clear();
        self.p2_moves.clear();
        self.sim_moves.clear();

        let n = board.cell_count();
        debug_assert!(self.sim_move_pos.len() >= n);
        self.sim_move_pos[..n].fill(-1);

        for i in 0..n {
            if board.cell_by_index(i) == EMPTY {
                self.sim_move_pos[i] = self.sim_moves.len() as i32;
                self.sim_moves.push(i as u32);
            }
        }

        let mut winner = board.check_win();
        let mut last_move: Option<usize> = None;

        while winner == EMPTY && !self.sim_moves.is_empty() {
            let mut selected: Option<usize> = None;

            if let Some(intrusion) = last_move {
                if let Some(save) = heuristics::bridge_save_move(board, intrusion, current_player)
                {
                    if self.sim_move_pos[save] >= 0 {
                        selected = Some(save);
                    }
                }
            }

            let selected = selected.unwrap_or_else(|| {
                self.sim_moves[rng.gen_range(0..self.sim_moves.len())] as usize
            });

            // Swap-and-pop removal, keeping the inverse map consistent.
            let pos = self.sim_move_pos[selected] as usize;
            self.sim_moves.swap_remove(pos);
            if pos < self.sim_moves.len() {
                self.sim_move_pos[self.sim_moves[pos] as usize] = pos as i32;
            }
            self.sim_move_pos[selected] = -1;

            let (r, c) = board.coord(selected);
            board.make_move(r, c, current_player);

            if current_player == PLAYER_ONE {
                self.p1_moves.push(selected as u32);
            } else {
                self.p2_moves.push(selected as u32);
            }

            last_move = Some(selected);
            winner = board.check_win();
            current_player = toggle_player(current_player);
        }

        winner
    }
}

impl Default for SimBuffers {
    fn default() -> Self {
        Self::new()
    }
}
