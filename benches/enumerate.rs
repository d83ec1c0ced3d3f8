//! Benchmarks for the enumeration main loop.
//!
//! These measure the cost of a full Froidure-Pin run over a mid-sized
//! transformation semigroup, and of the table-only product strategy
//! against direct multiplication.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use semigroups::prelude::*;

fn gens_t6() -> Vec<Transformation> {
    vec![
        Transformation::new(vec![0, 1, 2, 3, 4, 5]),
        Transformation::new(vec![1, 0, 2, 3, 4, 5]),
        Transformation::new(vec![4, 0, 1, 2, 3, 5]),
        Transformation::new(vec![5, 1, 2, 3, 4, 5]),
        Transformation::new(vec![1, 1, 2, 3, 4, 5]),
    ]
}

/// Benchmarks a full enumeration of a semigroup with 7776 elements.
fn bench_full_enumeration(c: &mut Criterion) {
    let gens = gens_t6();
    c.bench_function("enumerate_7776", |b| {
        b.iter(|| {
            let mut s = Semigroup::new(black_box(&gens)).unwrap();
            assert_eq!(s.size(), 7776);
        });
    });
}

/// Benchmarks resumable enumeration in many small batches.
fn bench_batched_enumeration(c: &mut Criterion) {
    let gens = gens_t6();
    c.bench_function("enumerate_7776_batch_256", |b| {
        b.iter(|| {
            let mut s = Semigroup::new(black_box(&gens)).unwrap();
            s.set_batch_size(256);
            let mut limit = 256;
            while !s.is_done() {
                s.enumerate(limit);
                limit += 256;
            }
            assert_eq!(s.current_size(), 7776);
        });
    });
}

/// Benchmarks the table-only product against direct multiplication.
fn bench_products(c: &mut Criterion) {
    let mut s = Semigroup::new(&gens_t6()).unwrap();
    let size = s.size();

    c.bench_function("product_by_reduction", |b| {
        b.iter(|| {
            let mut acc = 0;
            for i in (0..size).step_by(97) {
                acc ^= s.product_by_reduction(black_box(i), black_box(size - 1 - i));
            }
            acc
        });
    });

    c.bench_function("fast_product", |b| {
        b.iter(|| {
            let mut acc = 0;
            for i in (0..size).step_by(97) {
                acc ^= s.fast_product(black_box(i), black_box(size - 1 - i));
            }
            acc
        });
    });
}

criterion_group!(
    benches,
    bench_full_enumeration,
    bench_batched_enumeration,
    bench_products
);
criterion_main!(benches);
