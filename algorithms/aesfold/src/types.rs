//! Shared types used across the aesfold library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

// =============================================================================
// KERNEL INTERFACE
// =============================================================================

/// Unified kernel function signature: `input -> hash`.
///
/// All hardware backends (AES-NI, NEON) and the portable fallback are
/// wrapped into this same signature so the dispatcher can swap them at runtime.
pub type KernelFn = fn(&[u8]) -> u64;

// =============================================================================
// BACKENDS
// =============================================================================

/// Implementation backing the hash.
///
/// Every backend produces bit-identical output; they only differ in speed
/// and in the CPU features they need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// x86 / `x86_64` with AES-NI and SSE2.
    AesNi,
    /// `AArch64` with NEON and the ARMv8 AES extension.
    Neon,
    /// Software AES round, available everywhere.
    Portable,
}

impl Backend {
    /// All backends, fastest first.
    pub const ALL: [Self; 3] = [Self::AesNi, Self::Neon, Self::Portable];

    /// Human-readable backend name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AesNi => "AES-NI",
            Self::Neon => "NEON",
            Self::Portable => "Portable",
        }
    }

    /// Whether the current CPU can run this backend.
    #[must_use]
    pub fn is_supported(self) -> bool {
        crate::engine::dispatcher::is_supported(self)
    }

    /// The CPU features this backend requires, comma separated.
    #[must_use]
    pub const fn required_features(self) -> &'static str {
        match self {
            Self::AesNi => "aes, sse2",
            Self::Neon => "neon, aes",
            Self::Portable => "",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error for a backend whose CPU features are unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuFeatureError {
    backend: Backend,
}

impl CpuFeatureError {
    /// Create a new `CpuFeatureError` for the backend that cannot run.
    pub const fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// The backend that was requested.
    #[must_use]
    pub const fn backend(&self) -> Backend {
        self.backend
    }
}

impl fmt::Display for CpuFeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "backend '{}' unavailable: CPU features [{}] required",
            self.backend,
            self.backend.required_features()
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for CpuFeatureError {}
