//! Socket enumerator port (interface).

use crate::error::Result;

/// Which sockets a listing should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Every socket bound to this port, any state.
    Port(u32),
    /// Listening TCP sockets on all ports.
    AllListening,
}

impl Scope {
    /// The port this scope was restricted to, as text. Empty for
    /// [`Scope::AllListening`].
    pub fn query_port(&self) -> String {
        match self {
            Scope::Port(port) => port.to_string(),
            Scope::AllListening => String::new(),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::Port(port) => write!(f, "port {}", port),
            Scope::AllListening => write!(f, "all listening ports"),
        }
    }
}

/// Raw result of one enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// The tool produced tabular output, header line included.
    Output(String),
    /// The tool reported that nothing matched.
    NoMatches,
}

/// Port for listing open sockets.
///
/// Implementations spawn whatever tool the platform offers and hand back its
/// text untouched; parsing happens in the application layer.
pub trait EnumeratorPort: Send + Sync {
    /// List sockets covered by `scope`.
    fn list(&self, scope: Scope) -> impl std::future::Future<Output = Result<Listing>> + Send;
}
