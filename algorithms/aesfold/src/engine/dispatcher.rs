//! Hardware Dispatcher
//!
//! Selects the fastest available kernel (AES-NI, NEON, or portable) for the
//! current CPU. Detection runs once per process; every later call reuses
//! the cached kernel.

use crate::kernels;
use crate::types::{Backend, CpuFeatureError, KernelFn};

#[cfg(feature = "std")]
use std::sync::OnceLock;

// =============================================================================
// CAPABILITY DETECTION
// =============================================================================

/// Whether `backend` can run on this CPU.
#[must_use]
pub fn is_supported(backend: Backend) -> bool {
    match backend {
        Backend::AesNi => has_aesni(),
        Backend::Neon => has_neon_aes(),
        Backend::Portable => true,
    }
}

fn has_aesni() -> bool {
    cfg_if::cfg_if! {
        if #[cfg(all(feature = "std", any(target_arch = "x86", target_arch = "x86_64")))] {
            is_x86_feature_detected!("aes") && is_x86_feature_detected!("sse2")
        } else if #[cfg(any(target_arch = "x86", target_arch = "x86_64"))] {
            cfg!(all(target_feature = "aes", target_feature = "sse2"))
        } else {
            false
        }
    }
}

fn has_neon_aes() -> bool {
    cfg_if::cfg_if! {
        if #[cfg(all(feature = "std", target_arch = "aarch64"))] {
            std::arch::is_aarch64_feature_detected!("neon")
                && std::arch::is_aarch64_feature_detected!("aes")
        } else if #[cfg(target_arch = "aarch64")] {
            cfg!(all(target_feature = "neon", target_feature = "aes"))
        } else {
            false
        }
    }
}

// =============================================================================
// DISPATCHER
// =============================================================================

/// Returns the kernel for an explicitly requested backend.
///
/// # Errors
/// Returns [`CpuFeatureError`] if the CPU lacks the backend's features or the
/// backend does not exist on this architecture.
pub fn kernel_for(backend: Backend) -> Result<KernelFn, CpuFeatureError> {
    if !is_supported(backend) {
        return Err(CpuFeatureError::new(backend));
    }

    match backend {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        Backend::AesNi => Ok(safe_aesni_wrapper as KernelFn),
        #[cfg(target_arch = "aarch64")]
        Backend::Neon => Ok(safe_neon_wrapper as KernelFn),
        Backend::Portable => Ok(kernels::portable::oneshot as KernelFn),
        _ => Err(CpuFeatureError::new(backend)),
    }
}

#[cfg(feature = "std")]
static SELECTED: OnceLock<(Backend, KernelFn)> = OnceLock::new();

/// Backend fixed by the target features the crate was compiled with.
#[cfg(not(feature = "std"))]
const COMPILED_BACKEND: Backend = if cfg!(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "aes",
    target_feature = "sse2"
)) {
    Backend::AesNi
} else if cfg!(all(
    target_arch = "aarch64",
    target_feature = "neon",
    target_feature = "aes"
)) {
    Backend::Neon
} else {
    Backend::Portable
};

/// Returns the fastest backend for this CPU together with its kernel.
///
/// With `std` the choice is made on first use and cached. Without it the
/// choice is a compile-time constant; neither path logs after the first call.
#[must_use]
pub fn selected() -> (Backend, KernelFn) {
    #[cfg(feature = "std")]
    {
        *SELECTED.get_or_init(select)
    }
    #[cfg(not(feature = "std"))]
    {
        match kernel_for(COMPILED_BACKEND) {
            Ok(kernel) => (COMPILED_BACKEND, kernel),
            Err(_) => (Backend::Portable, kernels::portable::oneshot as KernelFn),
        }
    }
}

/// Returns the backend currently in use.
#[must_use]
pub fn active_backend() -> Backend {
    selected().0
}

#[cfg(feature = "std")]
fn select() -> (Backend, KernelFn) {
    let choice = Backend::ALL.into_iter().find_map(|backend| match kernel_for(backend) {
        Ok(kernel) => Some((backend, kernel)),
        Err(e) => {
            log::trace!("aesfold: skipping backend: {e}");
            None
        }
    });

    let (backend, kernel) =
        choice.unwrap_or((Backend::Portable, kernels::portable::oneshot as KernelFn));
    log::debug!("aesfold: selected {backend} backend");
    (backend, kernel)
}

// =============================================================================
// WRAPPERS
// =============================================================================

/// AES-NI wrapper.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[inline]
#[allow(unsafe_code)]
fn safe_aesni_wrapper(input: &[u8]) -> u64 {
    // SAFETY: Only reachable after CPUID validation (AES/SSE2) in `kernel_for`.
    unsafe { kernels::aesni::oneshot(input) }
}

/// NEON wrapper.
#[cfg(target_arch = "aarch64")]
#[inline]
#[allow(unsafe_code)]
fn safe_neon_wrapper(input: &[u8]) -> u64 {
    // SAFETY: Only reachable after feature validation (NEON/AES) in `kernel_for`.
    unsafe { kernels::neon::oneshot(input) }
}
