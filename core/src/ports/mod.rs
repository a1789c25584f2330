//! Ports layer - Trait definitions (interfaces).
//!
//! This module defines the capabilities the application layer uses to reach
//! the operating system. Implementations live in `adapters`; tests inject
//! their own.

mod enumerator;
mod signal;

pub use enumerator::{EnumeratorPort, Listing, Scope};
pub use signal::{SignalPort, TermSignal};
