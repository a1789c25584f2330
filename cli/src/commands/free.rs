//! Free command - kill every process holding the given ports.

use anyhow::Result;
use killport_core::{unique_pids, KillPortEngine, PortUsageRecord, TerminationOutcome, TerminationSummary};
use serde::Serialize;
use tracing::info;

use crate::output;

#[derive(Serialize)]
struct FreeReport {
    records: Vec<PortUsageRecord>,
    outcomes: Vec<TerminationOutcome>,
    summary: TerminationSummary,
}

pub fn run(engine: &KillPortEngine, ports: &str, json: bool) -> Result<bool> {
    let records = engine.find_by_ports(ports)?;
    let pids = unique_pids(&records);
    info!(ports = ports, count = pids.len(), "Terminating processes");

    let outcomes = engine.terminate_batch(&pids);
    let summary = TerminationSummary::from_outcomes(&outcomes);

    if json {
        let report = FreeReport {
            records,
            outcomes,
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if records.is_empty() {
        println!("No processes found on port {}.", ports);
    } else {
        output::print_outcomes(&outcomes);
    }

    Ok(summary.all_succeeded())
}
