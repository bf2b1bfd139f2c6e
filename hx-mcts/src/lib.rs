//! hx-mcts: time-bounded Monte-Carlo tree search with RAVE for Hex.
//!
//! The solver runs the classic select/expand/simulate/backpropagate loop
//! over an arena-backed tree, with:
//! - RAVE (AMAF) statistics blended into UCT child selection
//! - heuristic move ordering (center bias + bridge formation)
//! - a bridge-save playout policy
//! - per-thread reusable search state (node pool, playout buffers, RNG)

pub mod context;
pub mod heuristics;
pub mod mcts;
pub mod node;
pub mod params;
pub mod playout;
pub mod tree;

pub use context::reseed;
pub use mcts::{get_move, get_move_with, SearchReport};
pub use params::{Difficulty, ParamsError, SearchParams};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod mcts_tests;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }
}
