use criterion::{Criterion, criterion_group, criterion_main};
use range_fold::{IntRange, RangeFold, fold};
use std::hint::black_box;

fn benchmark_fold(c: &mut Criterion) {
    c.bench_function("fold_sum_ascending_10k", |b| {
        b.iter(|| fold(|i: i64, acc| acc + i, 0, black_box(0), black_box(10_000)));
    });

    c.bench_function("fold_sum_descending_10k", |b| {
        b.iter(|| fold(|i: i64, acc| acc + i, 0, black_box(10_000), black_box(0)));
    });

    c.bench_function("indices_collect_1k", |b| {
        b.iter(|| IntRange::new(black_box(1_000u32), 0).indices().collect::<Vec<_>>());
    });
}

criterion_group!(benches, benchmark_fold);
criterion_main!(benches);
