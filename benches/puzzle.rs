//! Benchmarks for the puzzle state machine and layout engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tileswap::grid::format_board;
use tileswap::solver::plan_clicks;
use tileswap::{compute_layout, PuzzleState, RenderModel, TileId, DEFAULT_TILE_COUNT};

/// Benchmark scrambling a fresh 50 tile puzzle.
fn bench_new_puzzle(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("new_puzzle", |b| {
        b.iter(|| PuzzleState::new(black_box(DEFAULT_TILE_COUNT), &mut rng))
    });
}

/// Benchmark a select-then-swap click pair.
fn bench_swap_clicks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut state = PuzzleState::new(DEFAULT_TILE_COUNT, &mut rng);
    c.bench_function("swap_clicks", |b| {
        b.iter(|| {
            state.on_tile_click(black_box(TileId::new(3)));
            state.on_tile_click(black_box(TileId::new(41)))
        })
    });
}

/// Benchmark layout computation across orientations.
fn bench_compute_layout(c: &mut Criterion) {
    c.bench_function("compute_layout", |b| {
        b.iter(|| {
            (
                compute_layout(black_box(1920.0), black_box(1080.0)),
                compute_layout(black_box(1080.0), black_box(1920.0)),
            )
        })
    });
}

/// Benchmark planning a full solve.
fn bench_plan_clicks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let state = PuzzleState::new(DEFAULT_TILE_COUNT, &mut rng);
    c.bench_function("plan_clicks", |b| b.iter(|| plan_clicks(black_box(&state))));
}

/// Benchmark building the render model and the text board.
fn bench_render(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let state = PuzzleState::new(DEFAULT_TILE_COUNT, &mut rng);
    let layout = compute_layout(1920.0, 1080.0);

    c.bench_function("render_model", |b| {
        b.iter(|| RenderModel::build(black_box(&state), black_box(&layout)))
    });
    c.bench_function("format_board", |b| {
        b.iter(|| format_board(black_box(&state), 10))
    });
}

criterion_group!(
    benches,
    bench_new_puzzle,
    bench_swap_clicks,
    bench_compute_layout,
    bench_plan_clicks,
    bench_render
);
criterion_main!(benches);
