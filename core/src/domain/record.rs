//! Port usage record, one row of lsof output.

use serde::{Deserialize, Serialize};

/// One observed binding of a process to a socket.
///
/// Every field is kept as text exactly as lsof reported it. `port`,
/// `protocol` and `state` are derived while parsing and never looked up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortUsageRecord {
    /// Process name (lsof may truncate it).
    pub command: String,
    /// Process ID as text.
    pub pid: String,
    /// Owning user name.
    pub user: String,
    /// File descriptor slot, e.g. `19u`.
    pub file_descriptor: String,
    /// Descriptor type, e.g. `IPv4`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Device identifier.
    pub device: String,
    /// SIZE/OFF column, opaque.
    pub size_or_offset: String,
    /// NODE column, e.g. `TCP`.
    pub node: String,
    /// Endpoint (`127.0.0.1:8080`, `*:3000`) without the state suffix.
    pub name: String,
    /// Text after the last `:` in `name`, empty if there is none.
    pub port: String,
    /// `TCP`, `UDP`, or the raw `node` value.
    pub protocol: String,
    /// Connection state such as `LISTEN`, empty when lsof printed none.
    pub state: String,
}

impl PortUsageRecord {
    /// Build a record from the eight leading lsof columns plus the resolved
    /// name and state. Derived fields are filled in here.
    pub fn new(columns: [&str; 8], name: impl Into<String>, state: impl Into<String>) -> Self {
        let [command, pid, user, fd, kind, device, size_or_offset, node] = columns;
        let name = name.into();

        Self {
            command: command.to_string(),
            pid: pid.to_string(),
            user: user.to_string(),
            file_descriptor: fd.to_string(),
            kind: kind.to_string(),
            device: device.to_string(),
            size_or_offset: size_or_offset.to_string(),
            node: node.to_string(),
            port: port_from_name(&name),
            protocol: protocol_from_node(node),
            name,
            state: state.into(),
        }
    }

    /// Whether lsof reported this socket as listening.
    pub fn is_listening(&self) -> bool {
        self.state.eq_ignore_ascii_case("LISTEN")
    }
}

impl std::fmt::Display for PortUsageRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (PID {}) {} {}", self.command, self.pid, self.protocol, self.name)?;
        if !self.state.is_empty() {
            write!(f, " ({})", self.state)?;
        }
        Ok(())
    }
}

/// Extract the port from an lsof NAME value.
///
/// Takes everything after the rightmost colon, so `[::1]:3000` gives `3000`.
/// Unbracketed IPv6 literals are not special-cased.
pub fn port_from_name(name: &str) -> String {
    match name.rfind(':') {
        Some(idx) => name[idx + 1..].to_string(),
        None => String::new(),
    }
}

/// Normalize the NODE column into a protocol name.
pub fn protocol_from_node(node: &str) -> String {
    let upper = node.to_uppercase();
    if upper.contains("TCP") {
        "TCP".to_string()
    } else if upper.contains("UDP") {
        "UDP".to_string()
    } else {
        node.to_string()
    }
}
