//! Backend Comparison Benchmark
//!
//! Compares the runtime dispatcher against the explicit AES-NI / NEON and
//! portable kernels. Quantifies dispatch overhead and the hardware speedup.

#![allow(missing_docs)]
#![allow(unsafe_code)]
#![allow(clippy::unwrap_used)]
use aesfold::{kernels, Backend};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("aesfold Backends");

    // Scenarios:
    // - Small (7B): dispatch overhead vs a single tail block
    // - Medium (1KB): L1 cache hot-path, 8-lane loop
    // - Large (256KB): bulk throughput
    let sizes = [7, 1024, 256 * 1024];

    for size in sizes {
        let input = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        // 1. Dispatched (Production Path)
        group.bench_function(format!("Dispatched - {size} bytes"), |b| {
            b.iter(|| aesfold::hash(black_box(&input)));
        });

        // 2. Hardware kernel, bypassing the dispatcher
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        if Backend::AesNi.is_supported() {
            group.bench_function(format!("AES-NI Native - {size} bytes"), |b| {
                b.iter(|| unsafe { kernels::aesni::oneshot(black_box(&input)) });
            });
        }

        #[cfg(target_arch = "aarch64")]
        if Backend::Neon.is_supported() {
            group.bench_function(format!("NEON Native - {size} bytes"), |b| {
                b.iter(|| unsafe { kernels::neon::oneshot(black_box(&input)) });
            });
        }

        // 3. Portable - software AES round
        // Baseline to quantify the speedup from hardware acceleration
        group.bench_function(format!("Portable (No SIMD) - {size} bytes"), |b| {
            b.iter(|| kernels::portable::oneshot(black_box(&input)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
