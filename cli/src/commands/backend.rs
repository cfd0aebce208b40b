//! Backend Selection
//!
//! Maps the `--backend` flag onto a library backend.

use aesfold::Backend;
use anyhow::{Context, Result};
use clap::ValueEnum;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum BackendChoice {
    /// Fastest backend supported by this CPU
    Auto,
    /// x86 AES-NI
    Aesni,
    /// AArch64 NEON + AES
    Neon,
    /// Software AES (any CPU)
    Portable,
}

impl BackendChoice {
    /// Resolve to a concrete backend, checking CPU support up front.
    pub fn resolve(self) -> Result<Backend> {
        let backend = match self {
            Self::Auto => return Ok(aesfold::active_backend()),
            Self::Aesni => Backend::AesNi,
            Self::Neon => Backend::Neon,
            Self::Portable => Backend::Portable,
        };

        // Probe once so unsupported backends fail before any file is read
        aesfold::hash_with_backend(&[], backend)
            .with_context(|| format!("--backend {self:?} cannot run here"))?;
        Ok(backend)
    }
}
