//! NEON Vector State
//!
//! `uint8x16_t`-backed implementation of [`AesVector`]. ARMv8 `aese` applies
//! AddRoundKey before SubBytes/ShiftRows, so it is fed a zero key and the
//! real key is XORed afterwards to match the x86 round shape.

#![allow(unsafe_code)]
#![allow(clippy::inline_always)]

use crate::kernels::vector::AesVector;

use core::arch::aarch64::{
    uint8x16_t, vaeseq_u8, vaesmcq_u8, vdupq_n_u8, veorq_u8, vld1q_u8, vst1q_u8,
};

// =============================================================================
// NEON VECTOR
// =============================================================================

/// One Q register.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct NeonVector(uint8x16_t);

// =============================================================================
// IMPLEMENTATION
// =============================================================================

// SAFETY: Every method requires NEON/AES (enforced by the dispatcher).
impl AesVector for NeonVector {
    #[inline(always)]
    unsafe fn zero() -> Self {
        Self(vdupq_n_u8(0))
    }

    #[inline(always)]
    unsafe fn from_u64s(lo: u64, hi: u64) -> Self {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&lo.to_le_bytes());
        bytes[8..].copy_from_slice(&hi.to_le_bytes());
        Self::load(&bytes)
    }

    #[inline(always)]
    unsafe fn load(block: &[u8; 16]) -> Self {
        Self(vld1q_u8(block.as_ptr()))
    }

    #[inline(always)]
    unsafe fn compress(a: Self, b: Self) -> Self {
        Self(veorq_u8(vaeseq_u8(a.0, vdupq_n_u8(0)), b.0))
    }

    #[inline(always)]
    unsafe fn round(a: Self, key: Self) -> Self {
        Self(veorq_u8(vaesmcq_u8(vaeseq_u8(a.0, vdupq_n_u8(0))), key.0))
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
        vst1q_u8(out.as_mut_ptr(), self.0);
        out
    }
}
