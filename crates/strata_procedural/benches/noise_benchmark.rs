//! Benchmark for value noise sampling.
//!
//! Run with: cargo bench --package strata_procedural --bench noise_benchmark

// criterion_group! emits an undocumented pub fn
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use strata_procedural::noise::{ValueNoise, WorldSeed};

fn benchmark_single_sample(c: &mut Criterion) {
    let noise = ValueNoise::new();

    c.bench_function("value_noise_sample", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.05;
            black_box(noise.sample_seeded(black_box(x), WorldSeed::new(0.37)))
        });
    });
}

fn benchmark_column_sweep(c: &mut Criterion) {
    let noise = ValueNoise::new();

    let mut group = c.benchmark_group("noise_sweep");
    group.throughput(Throughput::Elements(4096));
    group.bench_function("4096_columns", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for x in 0..4096u32 {
                sum += noise.sample_seeded(0.05 * f64::from(x), WorldSeed::new(0.37));
            }
            black_box(sum)
        });
    });
    group.finish();
}

fn benchmark_table_build(c: &mut Criterion) {
    c.bench_function("value_noise_table", |b| {
        let mut purpose = 0u64;
        b.iter(|| {
            purpose = purpose.wrapping_add(1);
            black_box(ValueNoise::with_key(WorldSeed::new(0.37).stream_key(purpose)))
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_sample,
    benchmark_column_sweep,
    benchmark_table_build
);
criterion_main!(benches);
