//! Block Folding & Finalization
//!
//! Backend-agnostic driver: consumes the input in 16-byte blocks, runs 8
//! independent lanes for inputs of at least 128 bytes, absorbs the partial
//! tail, and finalizes the 128-bit accumulator down to 64 bits.
//!
//! The lane grouping and the pairwise reduction order are part of the hash
//! definition. For inputs >= 128 bytes the result is NOT the serial
//! left-to-right fold; both are fixed and only unroll-path-to-unroll-path
//! compatibility is required.

#![allow(unsafe_code)]
#![allow(clippy::inline_always)]
#![allow(clippy::many_single_char_names)]

use super::constants::{SALT1, SALT2, SALT3, UNROLL_LANES, UNROLL_THRESHOLD, VEC_SIZE};
use super::vector::AesVector;

// =============================================================================
// HELPERS
// =============================================================================

#[inline(always)]
unsafe fn load_block<V: AesVector>(block: &[u8]) -> V {
    // `chunks_exact(VEC_SIZE)` guarantees 16 bytes
    let mut arr = [0u8; VEC_SIZE];
    arr.copy_from_slice(block);
    V::load(&arr)
}

// =============================================================================
// MULTI-LANE REDUCTION
// =============================================================================

/// Fold every full block of `input` into one accumulator.
///
/// Returns the accumulator and the trailing bytes (< 16) not yet consumed.
///
/// # Safety
/// The CPU features required by `V` must be present.
#[inline(always)]
pub unsafe fn reduce<V: AesVector>(input: &[u8]) -> (V, &[u8]) {
    let mut blocks = input.chunks_exact(VEC_SIZE);
    let mut acc = V::zero();

    if input.len() >= UNROLL_THRESHOLD {
        let total_blocks = input.len() / VEC_SIZE;
        let unrollable = total_blocks / UNROLL_LANES * UNROLL_LANES;

        let (head, rest) = input.split_at(unrollable * VEC_SIZE);
        let (first, body) = head.split_at(UNROLL_THRESHOLD);

        // Lanes start directly from the first 8 blocks
        let mut s: [V; UNROLL_LANES] = load_group(first);

        for group in body.chunks_exact(UNROLL_THRESHOLD) {
            let v: [V; UNROLL_LANES] = load_group(group);
            s[0] = V::compress(s[0], v[0]);
            s[1] = V::compress(s[1], v[1]);
            s[2] = V::compress(s[2], v[2]);
            s[3] = V::compress(s[3], v[3]);
            s[4] = V::compress(s[4], v[4]);
            s[5] = V::compress(s[5], v[5]);
            s[6] = V::compress(s[6], v[6]);
            s[7] = V::compress(s[7], v[7]);
        }

        // Pairwise tree: ((s0,s1),(s2,s3)) , ((s4,s5),(s6,s7))
        let a = V::compress(V::compress(s[0], s[1]), V::compress(s[2], s[3]));
        let b = V::compress(V::compress(s[4], s[5]), V::compress(s[6], s[7]));
        acc = V::compress(a, b);

        blocks = rest.chunks_exact(VEC_SIZE);
    }

    // Remaining full blocks (< 8 after the unrolled phase), in input order
    for block in blocks.by_ref() {
        acc = V::compress(acc, load_block(block));
    }

    (acc, blocks.remainder())
}

#[inline(always)]
unsafe fn load_group<V: AesVector>(group: &[u8]) -> [V; UNROLL_LANES] {
    // Lane i takes block i of the group
    core::array::from_fn(|i| load_block(&group[i * VEC_SIZE..][..VEC_SIZE]))
}

// =============================================================================
// TAIL ABSORPTION
// =============================================================================

/// Fold the final partial block (0..16 bytes) into `acc`.
///
/// # Safety
/// The CPU features required by `V` must be present.
#[inline(always)]
pub unsafe fn absorb_tail<V: AesVector>(acc: V, tail: &[u8]) -> V {
    if tail.is_empty() {
        return acc;
    }
    V::compress(acc, V::load_partial(tail))
}

// =============================================================================
// FINALIZER
// =============================================================================

/// Two full AES rounds and one last round over the salts, truncated to 64 bits.
///
/// # Safety
/// The CPU features required by `V` must be present.
#[inline(always)]
pub unsafe fn finalize<V: AesVector>(acc: V) -> u64 {
    let salt1 = V::from_u64s(SALT1.0, SALT1.1);
    let salt2 = V::from_u64s(SALT2.0, SALT2.1);
    let salt3 = V::from_u64s(SALT3.0, SALT3.1);

    let mut h = V::round(acc, salt1);
    h = V::round(h, salt2);
    h = V::round_last(h, salt3);
    h.low_u64()
}

// =============================================================================
// ONE-SHOT
// =============================================================================

/// Hash `input` with backend `V`.
///
/// # Safety
/// The CPU features required by `V` must be present.
#[inline(always)]
pub unsafe fn digest<V: AesVector>(input: &[u8]) -> u64 {
    let (acc, tail) = reduce::<V>(input);
    finalize(absorb_tail(acc, tail))
}
