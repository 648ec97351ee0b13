//! Criterion benches for the divide-and-conquer hull.
//! Sizes: n in {100, 1_000, 10_000, 100_000} uniform points in a square.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use strata::gen::{random_points, ReplayToken};
use strata::hull::Hull;

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[100usize, 1_000, 10_000, 100_000] {
        let pts = random_points(n, 1.0, ReplayToken::new(41, n as u64));
        group.bench_with_input(BenchmarkId::new("from_points", n), &pts, |b, pts| {
            b.iter(|| {
                let hull = Hull::from_points(pts).unwrap();
                criterion::black_box(hull.hull_len());
            })
        });
        group.bench_with_input(BenchmarkId::new("rebuild", n), &pts, |b, pts| {
            b.iter_batched(
                || Hull::from_points(pts).unwrap(),
                |mut hull| hull.rebuild(),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
