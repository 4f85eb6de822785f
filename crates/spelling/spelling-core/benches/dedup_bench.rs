//! Criterion benchmarks for order-preserving de-duplication.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use spelling_core::dedup::dedup_preserving_order;

fn make_words(count: usize, distinct: usize) -> Vec<String> {
    (0..count).map(|i| format!("word{}", i % distinct)).collect()
}

fn bench_dedup(c: &mut Criterion) {
    let small = make_words(100, 80);
    let large = make_words(10_000, 2_500);

    c.bench_function("dedup_100_words", |b| {
        b.iter(|| dedup_preserving_order(black_box(small.clone())))
    });
    c.bench_function("dedup_10k_words", |b| {
        b.iter(|| dedup_preserving_order(black_box(large.clone())))
    });
}

criterion_group!(benches, bench_dedup);
criterion_main!(benches);
