//! List command - show all listening ports.

use anyhow::Result;
use killport_core::KillPortEngine;

use crate::output;

pub fn run(engine: &KillPortEngine, json: bool) -> Result<bool> {
    let records = engine.find_all_listening()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(true);
    }

    if records.is_empty() {
        println!("No listening ports found.");
        return Ok(true);
    }

    output::print_records(&records);
    Ok(true)
}
