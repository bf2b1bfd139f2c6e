use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use hx_core::{HexBoard, PLAYER_ONE, PLAYER_TWO};
use hx_mcts::heuristics::sort_untried_moves;
use hx_mcts::mcts::bench_select_child;
use hx_mcts::playout::SimBuffers;
use hx_mcts::tree::{SearchTree, ROOT};
use hx_mcts::SearchParams;

fn bench_move_ordering(c: &mut Criterion) {
    let mut board = HexBoard::new(11, 11);
    board.make_move(5, 5, PLAYER_ONE);
    board.make_move(4, 6, PLAYER_ONE);
    board.make_move(6, 3, PLAYER_TWO);

    let params = SearchParams::default();
    let legal: Vec<u32> = board.legal_moves().iter().map(|&m| m as u32).collect();

    c.bench_function("solver_sort_untried_moves_11x11", |b| {
        let mut scratch = Vec::new();
        b.iter(|| {
            let mut moves = legal.clone();
            sort_untried_moves(&mut moves, &board, PLAYER_ONE, &params, &mut scratch);
            black_box(moves)
        })
    });
}

fn bench_child_selection(c: &mut Criterion) {
    // A root with 100 children carrying representative statistics.
    let board = HexBoard::new(11, 11);
    let params = SearchParams::default();
    let mut scratch = Vec::new();
    let mut tree = SearchTree::new();
    tree.reset(&board, PLAYER_ONE, &params, &mut scratch);

    for m in 0..100u32 {
        let id = tree.alloc_child(ROOT, m);
        let child = &mut tree[id];
        child.visits = (m % 37) + 1;
        child.wins = f64::from(m % 17);
        child.rave_visits = f64::from((m % 53) + 1);
        child.rave_wins = f64::from(m % 29);
    }
    tree[ROOT].visits = 10_000;

    c.bench_function("solver_rave_uct_select_100_children", |b| {
        b.iter(|| black_box(bench_select_child(black_box(&tree), ROOT, 3000.0, 0.2)))
    });
}

fn bench_playout(c: &mut Criterion) {
    let base = HexBoard::new(11, 11);
    let mut sim = SimBuffers::new();
    sim.ensure_capacity(base.cell_count());
    let mut rng = ChaCha8Rng::seed_from_u64(12345);

    c.bench_function("solver_playout_empty_11x11", |b| {
        b.iter(|| {
            let mut board = base.clone();
            black_box(sim.run(&mut board, PLAYER_ONE, &mut rng))
        })
    });
}

criterion_group!(
    benches,
    bench_move_ordering,
    bench_child_selection,
    bench_playout
);
criterion_main!(benches);
