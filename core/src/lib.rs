//! KillPort Core Library
//!
//! Finds which processes hold network ports and terminates them.
//! Provides functionality to:
//! - Query the sockets bound to one port, several ports, or every listening port
//! - Parse `lsof` output into structured records
//! - Kill processes by PID, escalating from SIGTERM to SIGKILL
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Records, outcomes and input validation
//! - `parser`: Pure lsof output parsing
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: External system implementations
//! - `application`: Use case services
//! - `engine`: Blocking facade for host applications
//!
//! # Platform Support
//! - macOS / Linux: Uses `lsof` and `kill(2)`
//! - Other platforms: enumeration needs an `lsof` on `PATH`; signals are unsupported

// Hexagonal architecture layers
pub mod domain;
pub mod ports;
pub mod adapters;
pub mod application;

pub mod config;
pub mod engine;
pub mod error;
pub mod parser;

// Re-export domain types (primary API)
pub use domain::{parse_port_list, unique_pids, PortUsageRecord, TerminationOutcome, TerminationSummary};

// Re-export other commonly used types
pub use adapters::{LsofEnumerator, NixSignaller};
pub use application::{DiscoveryService, TerminationService};
pub use config::{Config, ConfigStore};
pub use engine::KillPortEngine;
pub use error::{Error, Result};
pub use parser::parse_lsof_output;
pub use ports::{EnumeratorPort, Listing, Scope, SignalPort, TermSignal};
