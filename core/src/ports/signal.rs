//! Signal delivery port (interface).

use crate::error::Result;

/// Termination signals, in escalation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermSignal {
    /// SIGTERM: the process may catch it and clean up.
    Graceful,
    /// SIGKILL: cannot be caught or ignored.
    Forced,
}

impl TermSignal {
    /// Conventional signal name.
    pub fn name(&self) -> &'static str {
        match self {
            TermSignal::Graceful => "SIGTERM",
            TermSignal::Forced => "SIGKILL",
        }
    }
}

impl std::fmt::Display for TermSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Port for delivering signals to processes.
///
/// Success means the OS accepted the signal, not that the process exited.
pub trait SignalPort: Send + Sync {
    /// Send `signal` to `pid`.
    fn send(&self, pid: i32, signal: TermSignal) -> Result<()>;
}
