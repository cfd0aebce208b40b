#![cfg_attr(not(feature = "std"), no_std)]

//! # aesfold
//!
//! Non-cryptographic 64-bit hash built on the single-round AES primitive.
//! Accelerated by AES-NI (x86) or the ARMv8 crypto extension (AArch64),
//! with a byte-identical portable fallback.

//! # Usage
//! ```rust
//! // 1. One-shot hashing
//! let hash = aesfold::hash(b"Performance Matters");
//! println!("{hash:016x}");
//!
//! // 2. Forcing a backend (e.g. for cross-checking)
//! use aesfold::Backend;
//!
//! let portable = aesfold::hash_with_backend(b"Performance Matters", Backend::Portable)?;
//! assert_eq!(hash, portable);
//! # Ok::<(), aesfold::CpuFeatureError>(())
//! ```
//!
//! Not suitable where collision resistance against an adversary matters:
//! the construction is unkeyed and makes no cryptographic claims.

// =============================================================================
// MODULES
// =============================================================================

mod engine;
#[cfg(feature = "std")]
mod ffi;
// Kernels are public for cross-backend tests and benchmarks, hidden from docs
#[doc(hidden)]
pub mod kernels;
mod oneshot;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use kernels::constants::{BLOCK_SIZE, UNROLL_LANES};
pub use oneshot::{hash, hash_with_backend};
pub use types::{Backend, CpuFeatureError};

/// Returns the hardware backend selected for this process.
#[must_use]
pub fn active_backend() -> Backend {
    engine::active_backend()
}
