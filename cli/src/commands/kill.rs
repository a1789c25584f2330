//! Kill command - terminate processes by PID.

use anyhow::Result;
use killport_core::{KillPortEngine, TerminationSummary};

use crate::output;

pub fn run(engine: &KillPortEngine, pids: &[String], json: bool) -> Result<bool> {
    let outcomes = engine.terminate_batch(pids);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        output::print_outcomes(&outcomes);
    }

    Ok(TerminationSummary::from_outcomes(&outcomes).all_succeeded())
}
