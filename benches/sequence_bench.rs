//! Benchmark for the sequence functions.
//!
//! `pair_if` is quadratic by construction; the self-pairing group shows how
//! quickly that grows compared to the linear functions.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use figtally::sequence::{filter, map, pair_if, reduce};
use std::hint::black_box;

// =============================================================================
// Linear functions
// =============================================================================

fn benchmark_linear(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("linear");

    for size in [100, 1_000, 10_000] {
        let values: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("filter", size), &values, |bencher, values| {
            bencher.iter(|| black_box(filter(values, |value| **value % 3 == 0)));
        });

        group.bench_with_input(BenchmarkId::new("map", size), &values, |bencher, values| {
            bencher.iter(|| black_box(map(values, |value| value * 2)));
        });

        group.bench_with_input(BenchmarkId::new("reduce", size), &values, |bencher, values| {
            bencher.iter(|| black_box(reduce(values, |value, sum: u64| sum + value, 0)));
        });
    }

    group.finish();
}

// =============================================================================
// pair_if
// =============================================================================

fn benchmark_pair_if(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pair_if_self");

    for size in [10, 100, 500] {
        let keys: Vec<u64> = (0..size).map(|index| index % 17).collect();

        group.bench_with_input(BenchmarkId::new("shared_key", size), &keys, |bencher, keys| {
            bencher.iter(|| black_box(pair_if(keys, keys, |left, right| left == right).len()));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_linear, benchmark_pair_if);
criterion_main!(benches);
