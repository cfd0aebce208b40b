//! AES-NI Kernel Module
//!
//! Hash implementation on 128-bit XMM registers using `aesenc`/`aesenclast`.

// =============================================================================
// MODULES
// =============================================================================

mod state;

// =============================================================================
// EXPORTS
// =============================================================================

pub use state::AesNiVector;

use crate::kernels::fold;

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Hash `input` on the AES-NI backend.
///
/// # Safety
/// Requires AES and SSE2 CPU features (enforced by the dispatcher).
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn oneshot(input: &[u8]) -> u64 {
    fold::digest::<AesNiVector>(input)
}
