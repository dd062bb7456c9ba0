//! Grid enumeration benchmarks.
//!
//! Run with: cargo bench -p dial-analysis --bench enumeration_bench

use criterion::{criterion_group, criterion_main, Criterion};
use dial_analysis::enumerate::grid::{scored_times, ticking_candidates};
use dial_analysis::metrics::Metric;
use dial_analysis::symbolic::solver::critical_point_set;

fn sweeping_grid(c: &mut Criterion) {
    let candidates = critical_point_set();
    c.bench_function("sweeping_grid_max_min", |b| {
        b.iter(|| scored_times(&candidates, Metric::MaxMin));
    });
}

fn ticking_grid(c: &mut Criterion) {
    let candidates = ticking_candidates();
    c.bench_function("ticking_grid_min_max", |b| {
        b.iter(|| scored_times(&candidates, Metric::MinMax));
    });
}

criterion_group!(benches, sweeping_grid, ticking_grid);
criterion_main!(benches);
