//! Adapters layer - External system implementations.
//!
//! This module contains implementations of the port traits defined in `ports`.
//! Each adapter handles communication with the operating system.

pub mod lsof;
pub mod signal;

// Re-export main types for convenience
pub use lsof::LsofEnumerator;
pub use signal::NixSignaller;
