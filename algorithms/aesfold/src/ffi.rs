//! C-API Bindings
//!
//! Exposes aesfold to C/C++ via FFI with pointer safety and panic boundaries.

#![allow(unsafe_code)]

use crate::oneshot;

use std::os::raw::c_char;
use std::slice;

// =============================================================================
// HELPERS
// =============================================================================

/// Rebuild the input slice; a null pointer is only accepted for empty input.
unsafe fn input_slice<'a>(input_ptr: *const u8, input_len: usize) -> Option<&'a [u8]> {
    if input_ptr.is_null() {
        return (input_len == 0).then_some(&[][..]);
    }
    Some(slice::from_raw_parts(input_ptr, input_len))
}

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Compute the aesfold hash.
///
/// Returns `0` for a null pointer with a non-zero length; use
/// [`aesfold_hash_checked`] to tell that case apart from a real hash.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
#[no_mangle]
pub unsafe extern "C" fn aesfold_hash(input_ptr: *const u8, input_len: usize) -> u64 {
    let Some(input) = input_slice(input_ptr, input_len) else {
        return 0;
    };
    std::panic::catch_unwind(|| oneshot::hash(input)).unwrap_or(0)
}

/// Compute the aesfold hash and report failures.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `output_ptr` must be valid for one writable, aligned `u64`
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn aesfold_hash_checked(
    input_ptr: *const u8,
    input_len: usize,
    output_ptr: *mut u64,
) -> i32 {
    if output_ptr.is_null() {
        return -1;
    }
    let Some(input) = input_slice(input_ptr, input_len) else {
        return -1;
    };

    match std::panic::catch_unwind(|| oneshot::hash(input)) {
        Ok(hash) => {
            output_ptr.write(hash);
            0
        }
        Err(_) => -2,
    }
}

// =============================================================================
// INTROSPECTION
// =============================================================================

/// Get the name of the active backend.
///
/// # Returns
/// A pointer to a static, null-terminated C string (e.g. `"AES-NI"`). Must NOT be freed by the caller.
#[no_mangle]
pub extern "C" fn aesfold_backend_name() -> *const c_char {
    let name: &'static core::ffi::CStr = match crate::active_backend() {
        crate::Backend::AesNi => c"AES-NI",
        crate::Backend::Neon => c"NEON",
        crate::Backend::Portable => c"Portable",
    };
    name.as_ptr()
}
