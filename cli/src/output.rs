//! Table rendering for records and termination outcomes.

use killport_core::{PortUsageRecord, TerminationOutcome, TerminationSummary};

pub fn print_records(records: &[PortUsageRecord]) {
    println!(
        "{:<6} {:<7} {:<8} {:<16} {:<10} {:<12} NAME",
        "PROTO", "PORT", "PID", "COMMAND", "USER", "STATE"
    );
    println!("{}", "-".repeat(80));

    for record in records {
        println!(
            "{:<6} {:<7} {:<8} {:<16} {:<10} {:<12} {}",
            record.protocol,
            record.port,
            record.pid,
            truncate(&record.command, 16),
            truncate(&record.user, 10),
            if record.state.is_empty() { "-" } else { &record.state },
            record.name
        );
    }

    println!("\nTotal: {} entries", records.len());
}

pub fn print_outcomes(outcomes: &[TerminationOutcome]) {
    for outcome in outcomes {
        let mark = if outcome.succeeded { "ok" } else { "FAILED" };
        println!("{:<7} {:<8} {}", mark, outcome.pid, outcome.message);
    }

    println!("\n{}", TerminationSummary::from_outcomes(outcomes));
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max - 1).collect();
        format!("{}…", head)
    }
}
