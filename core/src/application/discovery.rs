//! Port discovery service.

use tracing::debug;

use crate::domain::{parse_port, parse_port_list, PortUsageRecord};
use crate::error::Result;
use crate::parser::parse_lsof_output;
use crate::ports::{EnumeratorPort, Listing, Scope};

/// Application service for finding which processes hold which ports.
///
/// Runs the injected enumerator and parses whatever it returns. Nothing is
/// cached between calls.
pub struct DiscoveryService<E: EnumeratorPort> {
    enumerator: E,
}

impl<E: EnumeratorPort> DiscoveryService<E> {
    /// Create a new discovery service with the given enumerator.
    pub fn new(enumerator: E) -> Self {
        Self { enumerator }
    }

    pub fn enumerator(&self) -> &E {
        &self.enumerator
    }

    /// Find every socket bound to `port`.
    ///
    /// An empty or non-numeric port is rejected before anything is spawned.
    pub async fn find_by_port(&self, port: &str) -> Result<Vec<PortUsageRecord>> {
        let port = parse_port(port)?;
        self.query(Scope::Port(port)).await
    }

    /// Find sockets for a list of ports such as `"8080, 3000"`.
    ///
    /// Ports are queried one at a time in input order; the first failure
    /// aborts the whole call.
    pub async fn find_by_ports(&self, input: &str) -> Result<Vec<PortUsageRecord>> {
        let ports = parse_port_list(input)?;

        let mut records = Vec::new();
        for port in ports {
            records.extend(self.query(Scope::Port(port)).await?);
        }
        Ok(records)
    }

    /// Find every listening TCP socket.
    pub async fn find_all_listening(&self) -> Result<Vec<PortUsageRecord>> {
        self.query(Scope::AllListening).await
    }

    async fn query(&self, scope: Scope) -> Result<Vec<PortUsageRecord>> {
        match self.enumerator.list(scope).await? {
            Listing::NoMatches => {
                debug!(%scope, "No sockets found");
                Ok(Vec::new())
            }
            Listing::Output(text) => {
                let records = parse_lsof_output(&text, &scope.query_port());
                debug!(%scope, count = records.len(), "Parsed lsof output");
                Ok(records)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use parking_lot::Mutex;
    use std::collections::HashMap;

    const LISTEN_OUTPUT: &str = r#"COMMAND    PID  USER   FD   TYPE             DEVICE SIZE/OFF NODE NAME
node     34805  code   19u  IPv6 0x3d8015e195af1f3f      0t0  TCP [::1]:3000 (LISTEN)
nginx        1  root    6u  IPv4 0x1234567890abcdef      0t0  TCP *:80 (LISTEN)
"#;

    /// Mock enumerator for testing.
    #[derive(Default)]
    struct MockEnumerator {
        listings: HashMap<Scope, Listing>,
        failure: Option<String>,
        calls: Mutex<Vec<Scope>>,
    }

    impl MockEnumerator {
        fn with(mut self, scope: Scope, output: &str) -> Self {
            self.listings
                .insert(scope, Listing::Output(output.to_string()));
            self
        }

        fn failing(message: &str) -> Self {
            Self {
                failure: Some(message.to_string()),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<Scope> {
            self.calls.lock().clone()
        }
    }

    impl EnumeratorPort for MockEnumerator {
        async fn list(&self, scope: Scope) -> Result<Listing> {
            self.calls.lock().push(scope);
            if let Some(message) = &self.failure {
                return Err(Error::EnumerationFailed(message.clone()));
            }
            Ok(self
                .listings
                .get(&scope)
                .cloned()
                .unwrap_or(Listing::NoMatches))
        }
    }

    fn port_output(pid: &str, port: u32) -> String {
        format!(
            "COMMAND PID USER FD TYPE DEVICE SIZE/OFF NODE NAME\nnode {} dev 19u IPv4 0x1 0t0 TCP 127.0.0.1:{} (LISTEN)\n",
            pid, port
        )
    }

    #[tokio::test]
    async fn test_find_by_port() {
        let enumerator = MockEnumerator::default().with(Scope::Port(3000), &port_output("42", 3000));
        let service = DiscoveryService::new(enumerator);

        let records = service.find_by_port(" 3000 ").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pid, "42");
        assert_eq!(records[0].port, "3000");
        assert_eq!(service.enumerator().calls(), vec![Scope::Port(3000)]);
    }

    #[tokio::test]
    async fn test_no_matches_is_empty() {
        let service = DiscoveryService::new(MockEnumerator::default());

        let records = service.find_by_port("9999").await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_port_spawns_nothing() {
        let service = DiscoveryService::new(MockEnumerator::default());

        for input in ["", "   ", "abc", "-80", "80.5"] {
            let err = service.find_by_port(input).await.unwrap_err();
            assert!(err.is_invalid_input(), "{:?} should be rejected", input);
        }
        assert!(service.enumerator().calls().is_empty());
    }

    #[tokio::test]
    async fn test_enumeration_failure_propagates() {
        let service = DiscoveryService::new(MockEnumerator::failing("permission denied"));

        let err = service.find_all_listening().await.unwrap_err();
        assert!(matches!(err, Error::EnumerationFailed(_)));
        assert!(err.to_string().contains("permission denied"));
    }

    #[tokio::test]
    async fn test_find_all_listening() {
        let enumerator = MockEnumerator::default().with(Scope::AllListening, LISTEN_OUTPUT);
        let service = DiscoveryService::new(enumerator);

        let records = service.find_all_listening().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].command, "node");
        assert_eq!(records[1].command, "nginx");
        assert_eq!(service.enumerator().calls(), vec![Scope::AllListening]);
    }

    #[tokio::test]
    async fn test_find_by_ports_concatenates_in_order() {
        let enumerator = MockEnumerator::default()
            .with(Scope::Port(8080), &port_output("1", 8080))
            .with(Scope::Port(3000), &port_output("2", 3000));
        let service = DiscoveryService::new(enumerator);

        let records = service.find_by_ports("8080, 5432 3000,8080").await.unwrap();
        let pids: Vec<&str> = records.iter().map(|r| r.pid.as_str()).collect();
        assert_eq!(pids, vec!["1", "2"]);
        assert_eq!(
            service.enumerator().calls(),
            vec![Scope::Port(8080), Scope::Port(5432), Scope::Port(3000)]
        );
    }

    #[tokio::test]
    async fn test_find_by_ports_rejects_any_bad_token() {
        let service = DiscoveryService::new(MockEnumerator::default());

        assert!(service.find_by_ports("8080 nope").await.is_err());
        assert!(service.enumerator().calls().is_empty());
    }
}
