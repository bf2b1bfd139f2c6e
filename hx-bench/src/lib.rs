//! hx-bench: criterion micro-benchmarks for the board engine and solver.
//!
//! Run with `cargo bench -p hx-bench`.
