//! Criterion benchmarks for `find_path` on the reference profiles.

use criterion::{criterion_group, criterion_main, Criterion};
use roam_bench::{query_pairs, reference_terrain, stress_terrain};
use roam_planner::{MovementPlanner, TravelMode};
use std::hint::black_box;

/// Benchmark: 100 queries in `Any` mode on the 100x100 reference map.
fn bench_find_path_any_10k(c: &mut Criterion) {
    let map = reference_terrain(42);
    let pairs = query_pairs(&map, 100, 7);
    let mut planner = MovementPlanner::builder().terrain(&map).build().unwrap();

    c.bench_function("find_path_any_10k", |b| {
        b.iter(|| {
            for &(start, target) in &pairs {
                let _ = black_box(planner.find_path(start, target, TravelMode::Any));
            }
        });
    });
}

/// Benchmark: the same queries in `LandOnly` mode, which spills into
/// the secondary area whenever start and target sit on different
/// islands.
fn bench_find_path_land_only_10k(c: &mut Criterion) {
    let map = reference_terrain(42);
    let pairs = query_pairs(&map, 100, 7);
    let mut planner = MovementPlanner::builder().terrain(&map).build().unwrap();

    c.bench_function("find_path_land_only_10k", |b| {
        b.iter(|| {
            for &(start, target) in &pairs {
                let _ = black_box(planner.find_path(start, target, TravelMode::LandOnly));
            }
        });
    });
}

/// Benchmark: 10 long queries on the ~100K-cell stress map.
fn bench_find_path_any_100k(c: &mut Criterion) {
    let map = stress_terrain(42);
    let pairs = query_pairs(&map, 10, 11);
    let mut planner = MovementPlanner::builder().terrain(&map).build().unwrap();

    c.bench_function("find_path_any_100k", |b| {
        b.iter(|| {
            for &(start, target) in &pairs {
                let _ = black_box(planner.find_path(start, target, TravelMode::Any));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_find_path_any_10k,
    bench_find_path_land_only_10k,
    bench_find_path_any_100k
);
criterion_main!(benches);
