//! Public API Layer
//!
use crate::engine::dispatcher;
use crate::types::{Backend, CpuFeatureError};

// =============================================================================
// GENERIC HASHING
// =============================================================================

/// Compute the aesfold hash of `input`.
///
/// Runs on the fastest backend the CPU supports. The result is identical
/// on every backend and architecture.
///
/// # Example
/// ```rust
/// let hash = aesfold::hash(b"Performance");
/// assert_eq!(hash, aesfold::hash(b"Performance"));
/// ```
#[must_use]
#[inline]
pub fn hash(input: &[u8]) -> u64 {
    let (_, kernel) = dispatcher::selected();
    kernel(input)
}

// =============================================================================
// EXPLICIT BACKEND
// =============================================================================

/// Compute the hash on a specific backend.
///
/// Used for cross-checking backends against each other and for benchmarks.
///
/// # Errors
/// Returns [`CpuFeatureError`] if the CPU cannot run `backend`.
///
/// # Example
/// ```rust
/// use aesfold::Backend;
///
/// let portable = aesfold::hash_with_backend(b"data", Backend::Portable)?;
/// assert_eq!(portable, aesfold::hash(b"data"));
/// # Ok::<(), aesfold::CpuFeatureError>(())
/// ```
pub fn hash_with_backend(input: &[u8], backend: Backend) -> Result<u64, CpuFeatureError> {
    let kernel = dispatcher::kernel_for(backend)?;
    Ok(kernel(input))
}
