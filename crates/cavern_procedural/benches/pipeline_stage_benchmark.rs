//! Pipeline Stage Benchmark
//!
//! Times seeding, one smoothing pass and each culling sweep in isolation
//! on the 100x450 reference map.

#![allow(missing_docs)]

use cavern_core::{CellState, DoubleBufferedGrid, EdgePolicy, Grid};
use cavern_procedural::{cull_regions, find_regions, seed_noise, AliveChance, CaveSeed, Smoother};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

const WIDTH: usize = 100;
const HEIGHT: usize = 450;

fn noise_grid() -> Grid {
    let mut grid = Grid::new(WIDTH, HEIGHT).unwrap();
    seed_noise(&mut grid, AliveChance::clamped(45), CaveSeed::new(1));
    grid
}

fn smoothed_grid() -> Grid {
    let mut grid = noise_grid();
    Smoother::new(EdgePolicy::Clip).run(&mut grid, 7);
    grid
}

fn benchmark_seeding(c: &mut Criterion) {
    let mut grid = Grid::new(WIDTH, HEIGHT).unwrap();

    c.bench_function("seed_noise_100x450", |b| {
        b.iter(|| black_box(seed_noise(&mut grid, AliveChance::clamped(45), CaveSeed::new(1))));
    });
}

fn benchmark_smoothing_pass(c: &mut Criterion) {
    let smoother = Smoother::new(EdgePolicy::Clip);

    c.bench_function("smoothing_pass_100x450", |b| {
        b.iter_batched(
            || DoubleBufferedGrid::new(noise_grid()),
            |mut buffers| black_box(smoother.pass(&mut buffers)),
            BatchSize::SmallInput,
        );
    });
}

fn benchmark_region_discovery(c: &mut Criterion) {
    let grid = smoothed_grid();

    c.bench_function("find_floor_regions_100x450", |b| {
        b.iter(|| black_box(find_regions(&grid, CellState::Floor, EdgePolicy::Clip)));
    });
}

fn benchmark_culling(c: &mut Criterion) {
    let mut group = c.benchmark_group("cull_sweep");

    for state in [CellState::Wall, CellState::Floor] {
        group.bench_function(format!("{state:?}"), |b| {
            b.iter_batched(
                smoothed_grid,
                |mut grid| black_box(cull_regions(&mut grid, state, 50, EdgePolicy::Clip)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_seeding,
    benchmark_smoothing_pass,
    benchmark_region_discovery,
    benchmark_culling
);
criterion_main!(benches);
