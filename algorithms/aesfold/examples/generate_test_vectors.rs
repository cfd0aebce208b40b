//! Generator for aesfold test vectors
//!
//! Generates the canonical JSON test vectors used by `tests/test_vectors.json`.
//! Hashes are computed on the portable backend so the file never depends on
//! the machine that produced it.
#![allow(clippy::unwrap_used)]
#![allow(clippy::cast_possible_truncation)]
use aesfold::kernels::portable::oneshot;
use serde_json::{json, Value};

fn vector(name: &str, input: &str, bytes: &[u8]) -> Value {
    json!({
        "name": name,
        "input": input,
        "hash": format!("{:016x}", oneshot(bytes))
    })
}

fn sequence(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 256) as u8).collect()
}

fn main() {
    let mut vectors = Vec::new();

    // =========================================================================
    // 1. BASIC VECTORS
    // =========================================================================

    // Empty input skips absorption: finalizer over the zero accumulator
    vectors.push(vector("empty", "", b""));
    vectors.push(vector("basic", "abc", b"abc"));
    vectors.push(vector("small", "aesfold", b"aesfold"));
    vectors.push(vector("hello_world", "hello world", b"hello world"));
    let pangram = "The quick brown fox jumps over the lazy dog";
    vectors.push(vector("pangram", pangram, pangram.as_bytes()));

    // =========================================================================
    // 2. BOUNDARY CONDITIONS
    // =========================================================================

    // One full block, no tail
    vectors.push(vector("exact_block_16", "EXACT_16_ZERO", &[0x00u8; 16]));

    // Largest serial-only input
    vectors.push(vector("unaligned_127", "UNALIGNED_127_ONE", &[0x01u8; 127]));

    // Smallest input on the 8-lane path
    vectors.push(vector("exact_unroll_128", "EXACT_128_ZERO", &[0x00u8; 128]));

    // 8-lane path plus a 1-byte tail
    vectors.push(vector("unaligned_129", "UNALIGNED_129_TWO", &[0x02u8; 129]));

    // Distinct bytes so lane misassignment shows up
    vectors.push(vector("sequence_133", "SEQUENCE_133", &sequence(133)));
    vectors.push(vector("sequence_256", "SEQUENCE_256", &sequence(256)));

    // =========================================================================
    // 3. BULK INPUTS
    // =========================================================================

    vectors.push(vector("medium_256", "MEDIUM_256_A", &[0x41u8; 256]));
    vectors.push(vector("large", "LARGE_1KB", &[0x41u8; 1024]));
    vectors.push(vector("huge", "HUGE_1MB", &vec![0x41u8; 1024 * 1024]));

    let output = json!({
        "algorithm": "aesfold",
        "output": "u64, lowercase hex, 16 digits",
        "vectors": vectors
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
