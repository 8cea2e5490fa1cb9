//! Criterion micro-benchmarks for element ID hashing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use framemem_bench::{element_labels, reference_profile};
use framemem_core::{hash_many_numbers, hash_string, HashBuilder, HashOptions, Joiner};

/// Benchmark: hash every reference-profile label with the default joiner.
fn bench_hash_labels(c: &mut Criterion) {
    let labels = element_labels(reference_profile().element_count, 42);
    let opts = HashOptions::default();
    c.bench_function("hash_string_256", |b| {
        b.iter(|| {
            for label in &labels {
                black_box(hash_string(black_box(label), 0, &opts));
            }
        });
    });
}

/// Benchmark: nested IDs, each child seeded by its parent.
fn bench_hash_nested(c: &mut Criterion) {
    let labels = element_labels(16, 7);
    let opts = HashOptions::with_joiner(Joiner::Separator("/".into()));
    c.bench_function("hash_nested_depth_16", |b| {
        b.iter(|| {
            let mut builder = HashBuilder::new(0);
            for label in &labels {
                builder.add_string(label, &opts);
            }
            black_box(builder.build());
        });
    });
}

/// Benchmark: list-row IDs from (list, row, column) triples.
fn bench_hash_numbers(c: &mut Criterion) {
    let opts = HashOptions::default();
    c.bench_function("hash_many_numbers_1k", |b| {
        b.iter(|| {
            for row in 0..1024u32 {
                black_box(hash_many_numbers(0, &[3, row, row & 7], &opts));
            }
        });
    });
}

/// Benchmark: raw byte folding without tag maintenance.
fn bench_hash_bytes(c: &mut Criterion) {
    let data = vec![0xA5u8; 4096];
    c.bench_function("hash_add_bytes_4k", |b| {
        b.iter(|| {
            let mut builder = HashBuilder::new(0);
            builder.add_bytes(black_box(&data), data.len());
            black_box(builder.hash());
        });
    });
}

criterion_group!(
    benches,
    bench_hash_labels,
    bench_hash_nested,
    bench_hash_numbers,
    bench_hash_bytes
);
criterion_main!(benches);
