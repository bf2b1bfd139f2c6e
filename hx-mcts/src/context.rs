//! Per-thread reusable search state.
//!
//! Everything mutable the solver touches between calls lives here: the
//! search tree's node pool, the playout buffers, the RAVE lookup bitmap,
//! the sort scratch, and the RNG. The context is thread-local, so
//! concurrent `get_move` calls from distinct threads never share mutable
//! state.

use std::cell::RefCell;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::playout::SimBuffers;
use crate::tree::SearchTree;

pub struct SearchContext {
    pub rng: ChaCha8Rng,
    pub tree: SearchTree,
    pub sim: SimBuffers,
    pub rave_lookup: Vec<bool>,
    pub sort_scratch: Vec<(i32, u32)>,
}

impl SearchContext {
    fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
            tree: SearchTree::new(),
            sim: SimBuffers::new(),
            rave_lookup: vec![false; 400],
            sort_scratch: Vec::new(),
        }
    }

    /// Grow the per-board buffers to cover `n` cells. Never shrinks.
    pub fn ensure_capacity(&mut self, n: usize) {
        if self.rave_lookup.len() < n {
            self.rave_lookup.resize(n, false);
        }
        self.sim.ensure_capacity(n);
    }
}

thread_local! {
    static CONTEXT: RefCell<SearchContext> = RefCell::new(SearchContext::new());
}

pub(crate) fn with_context<R>(f: impl FnOnce(&mut SearchContext) -> R) -> R {
    CONTEXT.with(|ctx| f(&mut ctx.borrow_mut()))
}

/// Reseed the calling thread's RNG. The context RNG is otherwise seeded
/// once from OS entropy and advances across calls, so results are not
/// reproducible unless this is used.
pub fn reseed(seed: u64) {
    with_context(|ctx| ctx.rng = ChaCha8Rng::seed_from_u64(seed));
}
