//! # Neighbour Counting Benchmark
//!
//! Every smoothing pass counts the Moore neighbourhood of every cell,
//! so this is the innermost loop of the whole pipeline.
//!
//! Run with: cargo bench --package cavern_core --bench neighbour_benchmark

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cavern_core::{EdgePolicy, Grid};

/// Builds a deterministic striped grid without pulling in an RNG.
fn striped_grid(width: usize, height: usize) -> Grid {
    let cells = (0..width * height).map(|i| (i * 7 + i / 3) % 5 < 2).collect();
    Grid::from_cells(width, height, cells).expect("valid benchmark grid")
}

fn bench_full_grid_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("alive_neighbours_full_grid");

    for policy in [EdgePolicy::Clip, EdgePolicy::FlatIndex] {
        let grid = striped_grid(100, 450);
        group.throughput(Throughput::Elements(grid.size() as u64));

        group.bench_with_input(
            BenchmarkId::new("100x450", format!("{policy:?}")),
            &grid,
            |b, grid| {
                b.iter(|| {
                    let mut total = 0usize;
                    for index in 0..grid.size() {
                        total += usize::from(grid.alive_neighbours(black_box(index), policy));
                    }
                    black_box(total)
                });
            },
        );
    }

    group.finish();
}

fn bench_single_cell(c: &mut Criterion) {
    let grid = striped_grid(256, 256);

    c.bench_function("alive_neighbours_single_cell", |b| {
        let mut index = 0usize;
        b.iter(|| {
            index = (index + 257) % grid.size();
            black_box(grid.alive_neighbours(black_box(index), EdgePolicy::Clip))
        });
    });
}

criterion_group!(benches, bench_full_grid_count, bench_single_cell);
criterion_main!(benches);
