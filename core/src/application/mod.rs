//! Application layer - Use case services.
//!
//! Services are thin orchestrators that:
//! - Accept caller input as plain strings
//! - Use ports (traits) for external dependencies
//! - Return domain types as outputs

mod discovery;
mod termination;

pub use discovery::DiscoveryService;
pub use termination::{next_step, Escalation, TerminationService};
