//! lsof output parser.
//!
//! Expected lsof output format:
//! ```text
//! COMMAND    PID  USER   FD   TYPE             DEVICE SIZE/OFF NODE NAME
//! node     34805  code   19u  IPv6 0x3d8015e195af1f3f      0t0  TCP [::1]:3000 (LISTEN)
//! dnsmasq    812  root    4u  IPv4              17291      0t0  UDP *:53
//! ```
//!
//! The STATE suffix only appears for connection-oriented sockets, so the
//! field count plus the parenthesis wrapping of the last token decide which
//! token is NAME.

use crate::domain::PortUsageRecord;

/// Minimum number of whitespace-separated fields in a data line.
const MIN_FIELDS: usize = 9;

/// How the trailing columns of a line are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape<'a> {
    /// Exactly nine fields; the last one is NAME.
    NineField,
    /// Ten or more fields and the last is not parenthesized; it is NAME.
    TenFieldNoState,
    /// Ten or more fields ending in `(STATE)`; NAME is the one before it.
    TenFieldWithState { state: &'a str },
}

impl<'a> LineShape<'a> {
    /// Classify a tokenized line. Returns `None` for lines too short to parse.
    pub fn classify(fields: &[&'a str]) -> Option<Self> {
        if fields.len() < MIN_FIELDS {
            return None;
        }
        if fields.len() == MIN_FIELDS {
            return Some(LineShape::NineField);
        }

        let last = fields[fields.len() - 1];
        match last.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            Some(state) => Some(LineShape::TenFieldWithState { state }),
            None => Some(LineShape::TenFieldNoState),
        }
    }

    /// Resolve the NAME and STATE tokens for this shape.
    fn name_and_state(self, fields: &[&'a str]) -> (&'a str, &'a str) {
        let last = fields.len() - 1;
        match self {
            LineShape::NineField | LineShape::TenFieldNoState => (fields[last], ""),
            LineShape::TenFieldWithState { state } => (fields[last - 1], state),
        }
    }
}

/// Parse one data line. Returns `None` for malformed lines.
pub fn parse_line(line: &str) -> Option<PortUsageRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let shape = LineShape::classify(&fields)?;
    let (name, state) = shape.name_and_state(&fields);

    let columns = [
        fields[0], fields[1], fields[2], fields[3], fields[4], fields[5], fields[6], fields[7],
    ];
    Some(PortUsageRecord::new(columns, name, state))
}

/// Parse raw lsof output into records, preserving lsof's row order.
///
/// The first line is the column header. Lines with fewer than nine fields are
/// skipped. The query port is accepted for callers that scoped the query to a
/// port; rows are not filtered by it since lsof already did the scoping.
pub fn parse_lsof_output(output: &str, _query_port: &str) -> Vec<PortUsageRecord> {
    let mut lines = output.trim().lines();

    // Skip header line
    if lines.next().is_none() {
        return Vec::new();
    }

    lines.filter_map(parse_line).collect()
}
