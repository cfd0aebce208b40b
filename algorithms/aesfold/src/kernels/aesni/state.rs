//! AES-NI Vector State
//!
//! `__m128i`-backed implementation of [`AesVector`]. `compress` and
//! `round_last` map to `aesenclast`, `round` to `aesenc`.

#![allow(unsafe_code)]
#![allow(clippy::inline_always)]
#![allow(clippy::cast_possible_wrap)]

use crate::kernels::vector::AesVector;

#[cfg(target_arch = "x86")]
use core::arch::x86::{
    __m128i, _mm_aesenc_si128, _mm_aesenclast_si128, _mm_loadu_si128, _mm_set_epi64x,
    _mm_setzero_si128, _mm_storeu_si128,
};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{
    __m128i, _mm_aesenc_si128, _mm_aesenclast_si128, _mm_loadu_si128, _mm_set_epi64x,
    _mm_setzero_si128, _mm_storeu_si128,
};

// =============================================================================
// AES-NI VECTOR
// =============================================================================

/// One XMM register.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct AesNiVector(__m128i);

// =============================================================================
// IMPLEMENTATION
// =============================================================================

// SAFETY: Every method requires AES/SSE2 (enforced by the dispatcher). Methods are
// `inline(always)` so they are compiled inside the `target_feature` entry point.
impl AesVector for AesNiVector {
    #[inline(always)]
    unsafe fn zero() -> Self {
        Self(_mm_setzero_si128())
    }

    #[inline(always)]
    unsafe fn from_u64s(lo: u64, hi: u64) -> Self {
        Self(_mm_set_epi64x(hi as i64, lo as i64))
    }

    #[inline(always)]
    unsafe fn load(block: &[u8; 16]) -> Self {
        Self(_mm_loadu_si128(block.as_ptr().cast()))
    }

    #[inline(always)]
    unsafe fn compress(a: Self, b: Self) -> Self {
        Self(_mm_aesenclast_si128(a.0, b.0))
    }

    #[inline(always)]
    unsafe fn round(a: Self, key: Self) -> Self {
        Self(_mm_aesenc_si128(a.0, key.0))
    }

    #[inline(always)]
    unsafe fn low_u64(self) -> u64 {
        let bytes = self.to_bytes();
        let mut lo = [0u8; 8];
        lo.copy_from_slice(&bytes[..8]);
        u64::from_le_bytes(lo)
    }

    #[inline(always)]
    unsafe fn to_bytes(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        _mm_storeu_si128(out.as_mut_ptr().cast(), self.0);
        out
    }
}
