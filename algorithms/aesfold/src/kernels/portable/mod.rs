//! Portable implementation of aesfold.
//!
//! Software AES rounds on plain byte arrays, producing byte-identical results
//! to AES-NI / NEON on every target.

#![allow(unsafe_code)]
#![allow(clippy::inline_always)]

use self::utils::{aesenc, aesenclast};
use crate::kernels::fold;
use crate::kernels::vector::AesVector;

mod utils;

// =============================================================================
// STATE
// =============================================================================

/// 16 bytes in lane order; byte 0 is the lowest byte of the low half.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct SoftVector {
    /// Raw lane bytes.
    pub b: [u8; 16],
}

// SAFETY: No CPU requirements; the `unsafe` only satisfies the trait contract.
impl AesVector for SoftVector {
    #[inline(always)]
    unsafe fn zero() -> Self {
        Self { b: [0; 16] }
    }

    #[inline(always)]
    unsafe fn from_u64s(lo: u64, hi: u64) -> Self {
        let mut b = [0u8; 16];
        b[0..8].copy_from_slice(&lo.to_le_bytes());
        b[8..16].copy_from_slice(&hi.to_le_bytes());
        Self { b }
    }

    #[inline(always)]
    unsafe fn load(block: &[u8; 16]) -> Self {
        Self { b: *block }
    }

    #[inline(always)]
    unsafe fn compress(a: Self, b: Self) -> Self {
        Self {
            b: aesenclast(a.b, &b.b),
        }
    }

    #[inline(always)]
    unsafe fn round(a: Self, key: Self) -> Self {
        Self {
            b: aesenc(a.b, &key.b),
        }
    }

    #[inline(always)]
    unsafe fn low_u64(self) -> u64 {
        let mut lo = [0u8; 8];
        lo.copy_from_slice(&self.b[..8]);
        u64::from_le_bytes(lo)
    }

    #[inline(always)]
    unsafe fn to_bytes(self) -> [u8; 16] {
        self.b
    }
}

// =============================================================================
// PUBLIC ENTRY POINT
// =============================================================================

/// Portable software implementation of aesfold.
///
/// Handles all input sizes on any CPU.
pub fn oneshot(input: &[u8]) -> u64 {
    // SAFETY: `SoftVector` has no CPU feature requirements.
    unsafe { fold::digest::<SoftVector>(input) }
}
