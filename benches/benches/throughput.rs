//! aesfold Criterion Benchmark
//!
//! Latency and throughput across input sizes, with XXH3 as a baseline.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;
use xxhash_rust::xxh3::xxh3_64;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for small inputs (Hash Map keys, IDs).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    // 127/128 straddle the switch to the 8-lane path
    let sizes = [
        (0, "0B"),
        (8, "8B"),
        (16, "16B"),
        (64, "64B"),
        (127, "127B"),
        (128, "128B"),
        (256, "256B"),
        (KB, "1KB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| aesfold::hash(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK THROUGHPUT
// =============================================================================

/// Throughput from L1-resident buffers up to RAM.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk");
    group.sample_size(50);

    let sizes = [
        (8 * KB, "8KB-L1"),
        (64 * KB, "64KB-L2"),
        (512 * KB, "512KB-L3"),
        (8 * MB, "8MB-RAM"),
        (64 * MB, "64MB-RAM"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| aesfold::hash(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: BASELINE
// =============================================================================

/// Side by side with XXH3-64 on identical buffers.
fn bench_vs_xxh3(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-vs-XXH3");

    for size in [16, 128, 4 * KB, 256 * KB] {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("aesfold", size), &input, |b, data| {
            b.iter(|| aesfold::hash(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("xxh3_64", size), &input, |b, data| {
            b.iter(|| xxh3_64(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(benches, bench_latency, bench_bulk, bench_vs_xxh3);
criterion_main!(benches);
