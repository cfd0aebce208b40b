//! CLI Commands
//!
//! All aesfold CLI commands organized as separate modules.

mod backend;
mod check;
mod hash;

pub use backend::BackendChoice;
pub use check::check_mode;
pub use hash::hash_files;
