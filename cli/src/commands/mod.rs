//! CLI subcommands.
//!
//! Each `run` returns `Ok(false)` when the command completed but some part
//! of it failed, so `main` can set a non-zero exit status.

pub mod config;
pub mod find;
pub mod free;
pub mod kill;
pub mod list;
