//! Validation of caller-supplied ports and PIDs.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use super::PortUsageRecord;
use crate::error::{Error, Result};

/// Separators accepted between ports: commas, semicolons (ASCII or
/// full-width) and whitespace.
fn port_separators() -> &'static Regex {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    SEPARATORS.get_or_init(|| Regex::new(r"[,;，；\s]+").expect("valid separator regex"))
}

/// Validate a single port string.
///
/// Surrounding whitespace is ignored. Any non-negative integer is accepted;
/// range checking is left to lsof.
pub fn parse_port(port: &str) -> Result<u32> {
    let port = port.trim();
    if port.is_empty() {
        return Err(Error::InvalidInput("port number cannot be empty".to_string()));
    }

    port.parse::<u32>()
        .map_err(|_| Error::InvalidInput(format!("invalid port number: {}", port)))
}

/// Split a list such as `"8080, 3000;5432"` into validated ports.
///
/// Duplicates are dropped, keeping the first occurrence.
pub fn parse_port_list(input: &str) -> Result<Vec<u32>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput("port number cannot be empty".to_string()));
    }

    let mut seen = HashSet::new();
    let mut ports = Vec::new();
    for token in port_separators().split(trimmed).filter(|t| !t.is_empty()) {
        let port = parse_port(token)?;
        if seen.insert(port) {
            ports.push(port);
        }
    }

    if ports.is_empty() {
        return Err(Error::InvalidInput(format!("no port numbers in: {}", trimmed)));
    }
    Ok(ports)
}

/// Validate a PID string.
///
/// Zero and negative values are rejected: `kill(2)` would address a process
/// group or every process instead of a single PID.
pub fn parse_pid(pid: &str) -> Result<i32> {
    let trimmed = pid.trim();
    match trimmed.parse::<i32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(Error::InvalidInput(format!("invalid PID: {}", pid))),
    }
}

/// PIDs of the given records in first-seen order.
pub fn unique_pids(records: &[PortUsageRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.pid.as_str()))
        .map(|r| r.pid.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("8080").unwrap(), 8080);
        assert_eq!(parse_port("  3000 \n").unwrap(), 3000);
        assert_eq!(parse_port("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_port_rejects_bad_input() {
        assert!(parse_port("").unwrap_err().is_invalid_input());
        assert!(parse_port("   ").unwrap_err().is_invalid_input());
        assert!(parse_port("-1").unwrap_err().is_invalid_input());
        assert!(parse_port("http").unwrap_err().is_invalid_input());

        let err = parse_port(" 80a ").unwrap_err();
        assert_eq!(err.to_string(), "invalid port number: 80a");
    }

    #[test]
    fn test_parse_port_list_separators() {
        assert_eq!(parse_port_list("8080").unwrap(), vec![8080]);
        assert_eq!(
            parse_port_list("8080 3000,5432;22").unwrap(),
            vec![8080, 3000, 5432, 22]
        );
        assert_eq!(parse_port_list("80，443；8443").unwrap(), vec![80, 443, 8443]);
    }

    #[test]
    fn test_parse_port_list_dedups_in_order() {
        assert_eq!(parse_port_list("3000, 80 3000 80").unwrap(), vec![3000, 80]);
    }

    #[test]
    fn test_parse_port_list_rejects_bad_input() {
        assert!(parse_port_list("").is_err());
        assert!(parse_port_list(" , ; ").is_err());
        assert!(parse_port_list("80 abc").is_err());
    }

    #[test]
    fn test_parse_pid() {
        assert_eq!(parse_pid("123").unwrap(), 123);
        assert_eq!(parse_pid(" 42 ").unwrap(), 42);
        assert!(parse_pid("abc").is_err());
        assert!(parse_pid("").is_err());
        assert!(parse_pid("0").is_err());
        assert!(parse_pid("-1").is_err());
        assert!(parse_pid("99999999999").is_err());
    }

    #[test]
    fn test_parse_pid_message_echoes_input() {
        let err = parse_pid(" abc ").unwrap_err();
        assert_eq!(err.to_string(), "invalid PID:  abc ");
    }

    #[test]
    fn test_unique_pids() {
        let record = |pid: &str, name: &str| {
            PortUsageRecord::new(
                ["node", pid, "dev", "19u", "IPv4", "0x1", "0t0", "TCP"],
                name,
                "LISTEN",
            )
        };
        let records = vec![
            record("200", "*:3000"),
            record("100", "*:3001"),
            record("200", "[::1]:3000"),
        ];

        assert_eq!(unique_pids(&records), vec!["200", "100"]);
    }
}
