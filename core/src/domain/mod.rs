//! Domain layer - Pure data models and input rules.
//!
//! This module contains the records a query produces and the outcomes a
//! termination produces. These types have no I/O dependencies and can be
//! tested in isolation.

mod input;
mod outcome;
mod record;

// Re-export all domain types
pub use input::{parse_pid, parse_port, parse_port_list, unique_pids};
pub use outcome::{TerminationOutcome, TerminationSummary};
pub use record::{port_from_name, protocol_from_node, PortUsageRecord};
