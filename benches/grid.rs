use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sheetlift::{greet, hello, lift, lift_par, CellInput, Grid};
use std::hint::black_box;

// Helper function to create a rectangular selection of distinct cell values
fn create_test_grid(rows: usize, columns: usize) -> Grid<String> {
    Grid::from_rows((0..rows).map(|r| (0..columns).map(move |c| format!("R{}C{}", r, c))))
}

// Benchmark sequential lifting across selection sizes
fn bench_lift_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("lift_sizes");
    let sizes = [(10, 10), (100, 10), (1000, 26), (10000, 26)];

    for size in sizes.iter() {
        let (rows, columns) = *size;
        let grid = create_test_grid(rows, columns);
        let greet_all = lift(hello);

        group.bench_with_input(
            BenchmarkId::new("size", format!("{}x{}", rows, columns)),
            &grid,
            |b, grid| {
                b.iter(|| black_box(greet_all(grid.clone())));
            },
        );
    }
    group.finish();
}

// Benchmark parallel vs sequential lifting
fn bench_parallel_lifting(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_vs_sequential");
    let sizes = [(100, 26), (1000, 26), (10000, 26)];

    for size in sizes.iter() {
        let (rows, columns) = *size;
        let grid = create_test_grid(rows, columns);
        let sequential = lift(hello);
        let parallel = lift_par(hello);

        group.bench_with_input(
            BenchmarkId::new("parallel", format!("{}x{}", rows, columns)),
            &grid,
            |b, grid| {
                b.iter(|| black_box(parallel(grid.clone())));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("sequential", format!("{}x{}", rows, columns)),
            &grid,
            |b, grid| {
                b.iter(|| black_box(sequential(grid.clone())));
            },
        );
    }
    group.finish();
}

// Benchmark the dispatcher on a scalar argument
fn bench_greet_scalar(c: &mut Criterion) {
    c.bench_function("greet_scalar", |b| {
        b.iter(|| black_box(greet(CellInput::Scalar(black_box("World".to_string())))));
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20); // Reduced sample size for faster runs
    targets = bench_lift_sizes, bench_parallel_lifting, bench_greet_scalar
}
criterion_main!(benches);
