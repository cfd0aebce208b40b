//! Kernel Dispatcher
//!
//! Contains hardware-specific implementations of the aesfold hash function.

cfg_if::cfg_if! {
    if #[cfg(any(target_arch = "x86", target_arch = "x86_64"))] {
        pub mod aesni;
    } else if #[cfg(target_arch = "aarch64")] {
        pub mod neon;
    }
}
pub mod constants;
pub mod fold;
pub mod portable;
pub mod vector;
