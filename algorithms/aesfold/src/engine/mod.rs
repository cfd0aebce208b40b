//! Execution Engine
//!
//! CPU capability detection and kernel selection.

pub mod dispatcher;

pub use dispatcher::active_backend;
