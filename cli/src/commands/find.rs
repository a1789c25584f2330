//! Find command - show processes using the given ports.

use anyhow::Result;
use killport_core::KillPortEngine;

use crate::output;

pub fn run(engine: &KillPortEngine, ports: &str, json: bool) -> Result<bool> {
    let records = engine.find_by_ports(ports)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(true);
    }

    if records.is_empty() {
        println!("No processes found on port {}.", ports);
        return Ok(true);
    }

    output::print_records(&records);
    Ok(true)
}
