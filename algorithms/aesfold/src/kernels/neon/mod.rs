//! NEON Kernel Module
//!
//! Hash implementation for `AArch64` using the ARMv8 crypto extension.

mod state;

pub use state::NeonVector;

use crate::kernels::fold;

/// Hash `input` on the NEON backend.
///
/// # Safety
/// Requires NEON and AES CPU features (enforced by the dispatcher).
#[target_feature(enable = "neon,aes")]
#[allow(unsafe_code)]
pub unsafe fn oneshot(input: &[u8]) -> u64 {
    fold::digest::<NeonVector>(input)
}
