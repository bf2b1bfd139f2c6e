//! hx-core: Hex board representation, incremental connectivity, and board queries.
//!
//! The board keeps one disjoint-set forest per player (plus four virtual
//! border nodes) so that win detection after a move is near-constant
//! amortized. Everything the solver reads goes through this crate.

pub mod board;
mod distance;
pub mod dsu;
pub mod graph;
mod path;
mod render;


pub use board::{toggle_player, HexBoard, EMPTY, PLAYER_ONE, PLAYER_TWO};
pub use distance::UNREACHABLE;
pub use dsu::DisjointSet;
pub use graph::Adjacency;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }
}
