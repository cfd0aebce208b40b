//! Vector Capability Interface
//!
//! The handful of 128-bit operations the fold needs. Each backend implements
//! this trait once; `fold` and `finalize` are written generically over it.

#![allow(unsafe_code)]
#![allow(clippy::inline_always)]
#![allow(clippy::missing_safety_doc)]

/// A 128-bit value (16 bytes) with the AES round operations of one backend.
///
/// Values are immutable: every operation returns a new vector.
///
/// # Safety
/// All methods are `unsafe` because hardware implementations require the
/// backend's CPU features. Callers must only invoke them after the
/// dispatcher has verified those features (the portable implementation has
/// no requirements).
pub trait AesVector: Copy {
    /// All 16 bytes zero: the initial accumulator.
    unsafe fn zero() -> Self;

    /// Build a vector from its low and high 64-bit halves (little-endian).
    unsafe fn from_u64s(lo: u64, hi: u64) -> Self;

    /// Load one full block.
    unsafe fn load(block: &[u8; 16]) -> Self;

    /// Load `tail.len()` bytes (1..=15) and zero-fill the rest.
    ///
    /// Only the bytes of `tail` are read: they are copied into a zeroed
    /// local block which is then loaded in full.
    #[inline(always)]
    unsafe fn load_partial(tail: &[u8]) -> Self {
        debug_assert!(!tail.is_empty() && tail.len() < 16);
        let mut block = [0u8; 16];
        block[..tail.len()].copy_from_slice(tail);
        Self::load(&block)
    }

    /// Fold `b` into `a`: `ShiftRows(SubBytes(a)) ^ b`.
    ///
    /// Neither associative nor commutative; call order is part of the hash.
    unsafe fn compress(a: Self, b: Self) -> Self;

    /// One full AES encryption round: `MixColumns(ShiftRows(SubBytes(a))) ^ key`.
    unsafe fn round(a: Self, key: Self) -> Self;

    /// One last AES encryption round: `ShiftRows(SubBytes(a)) ^ key`.
    #[inline(always)]
    unsafe fn round_last(a: Self, key: Self) -> Self {
        Self::compress(a, key)
    }

    /// Bytes 0..8 read as a little-endian `u64`.
    unsafe fn low_u64(self) -> u64;

    /// All 16 bytes, in lane order.
    unsafe fn to_bytes(self) -> [u8; 16];
}
