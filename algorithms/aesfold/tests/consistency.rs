//! Consistency & Regression Tests
//!
//! Verifies the fold structure against straightforward reference models.
//! - Serial fold equivalence below the unroll threshold
//! - Lane assignment & reduction tree above it
//! - Tail padding behavior
//! - Boundary conditions around 16 and 128 bytes

#![allow(unsafe_code)]
#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use aesfold::kernels::constants::EMPTY_HASH;
use aesfold::kernels::fold;
use aesfold::kernels::portable::SoftVector;
use aesfold::kernels::vector::AesVector;
use aesfold::{hash, BLOCK_SIZE, UNROLL_LANES};

// =============================================================================
// REFERENCE MODELS
// =============================================================================

fn block(bytes: &[u8]) -> SoftVector {
    let mut b = [0u8; 16];
    b[..bytes.len()].copy_from_slice(bytes);
    SoftVector { b }
}

fn compress(a: SoftVector, b: SoftVector) -> SoftVector {
    unsafe { SoftVector::compress(a, b) }
}

fn finish(acc: SoftVector) -> u64 {
    unsafe { fold::finalize(acc) }
}

/// Left-to-right fold of every block, tail zero-padded.
fn serial_fold(input: &[u8]) -> u64 {
    let acc = input
        .chunks(BLOCK_SIZE)
        .fold(block(&[]), |acc, chunk| compress(acc, block(chunk)));
    finish(acc)
}

/// Eight lanes by block index modulo 8, reduced pairwise, then the rest serially.
fn unrolled_fold(input: &[u8]) -> u64 {
    let blocks: Vec<&[u8]> = input.chunks(BLOCK_SIZE).collect();
    let full = input.len() / BLOCK_SIZE;
    if full < UNROLL_LANES {
        return serial_fold(input);
    }

    let grouped = full / UNROLL_LANES * UNROLL_LANES;
    let mut lanes: Vec<SoftVector> = blocks[..UNROLL_LANES].iter().map(|b| block(b)).collect();
    for (i, b) in blocks[UNROLL_LANES..grouped].iter().enumerate() {
        let lane = i % UNROLL_LANES;
        lanes[lane] = compress(lanes[lane], block(b));
    }

    let pairs: Vec<SoftVector> = lanes.chunks(2).map(|p| compress(p[0], p[1])).collect();
    let quads: Vec<SoftVector> = pairs.chunks(2).map(|p| compress(p[0], p[1])).collect();
    let mut acc = compress(quads[0], quads[1]);

    for b in &blocks[grouped..] {
        acc = compress(acc, block(b));
    }
    finish(acc)
}

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(7).wrapping_add(3)).collect()
}

// =============================================================================
// STRUCTURAL EQUIVALENCE
// =============================================================================

#[test]
fn test_serial_equivalence_below_unroll() {
    for len in 0..128 {
        let input = pattern(len);
        assert_eq!(hash(&input), serial_fold(&input), "len={len}");
    }
}

#[test]
fn test_unrolled_model_all_lengths() {
    for len in 0..=1100 {
        let input = pattern(len);
        assert_eq!(hash(&input), unrolled_fold(&input), "len={len}");
    }
}

#[test]
fn test_tree_reduction_differs_from_serial() {
    // 128 bytes is the first length taking the 8-lane path
    let zeros = vec![0u8; 128];
    assert_eq!(hash(&zeros), 0x558f_9dc4_cdc7_38db);
    assert_eq!(serial_fold(&zeros), 0x2289_c097_0aa4_16cf);

    let seq: Vec<u8> = (0..133u8).collect();
    assert_eq!(hash(&seq), 0xb2ee_07d2_8629_9de3);
    assert_eq!(serial_fold(&seq), 0x2b6e_2e3b_52dc_18c8);
}

#[test]
fn test_reduce_returns_tail() {
    for len in [0, 1, 15, 16, 17, 127, 128, 129, 143, 144, 1023, 1024, 1025] {
        let input = pattern(len);
        let (_, tail) = unsafe { fold::reduce::<SoftVector>(&input) };
        assert_eq!(tail, &input[len - len % BLOCK_SIZE..], "len={len}");
    }
}

// =============================================================================
// BOUNDARY CONDITIONS & PADDING
// =============================================================================

#[test]
fn test_empty_input() {
    assert_eq!(hash(b""), EMPTY_HASH);
    assert_eq!(hash(&[]), finish(block(&[])));
}

#[test]
fn test_exact_boundary_conditions() {
    let sizes = [0, 1, 15, 16, 17, 127, 128, 129, 1023, 1024, 1025];

    for size in sizes {
        let input = vec![0xA5u8; size];
        let h1 = hash(&input);
        let h2 = hash(&input);
        assert_eq!(h1, h2, "Determinism failure at size {size}");
    }
}

#[test]
fn test_neighbouring_lengths_differ() {
    let data = pattern(1025);
    for len in [1, 15, 16, 17, 127, 128, 129, 1023, 1024, 1025] {
        assert_ne!(
            hash(&data[..len]),
            hash(&data[..len - 1]),
            "Appending byte {} did not change the hash",
            len - 1
        );
    }
}

#[test]
fn test_zero_padding_is_not_length_tagged() {
    // Short zero inputs pad to the same block as a full zero block
    let full = hash(&[0u8; 16]);
    assert_eq!(full, 0x5073_3a06_1b36_cf20);
    for len in 1..16 {
        assert_eq!(hash(&vec![0u8; len]), full, "len={len}");
    }
    // The empty input skips absorption entirely
    assert_ne!(hash(&[]), full);
}

#[test]
fn test_trailing_block_position_matters() {
    // Same 9 blocks, last one moved: the serial remainder must see it
    let mut a = vec![0u8; 144];
    let mut b = vec![0u8; 144];
    a[128] = 1;
    b[0] = 1;
    assert_ne!(hash(&a), hash(&b));
}
