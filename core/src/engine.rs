//! KillPort Engine - synchronous entry point for host applications.
//!
//! The engine exposes the discovery and termination operations as blocking
//! calls. It owns a single-threaded tokio runtime and blocks on it for each
//! enumeration, so it must not be called from inside an async context.

use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use crate::adapters::{LsofEnumerator, NixSignaller};
use crate::application::{DiscoveryService, TerminationService};
use crate::config::{Config, ConfigStore};
use crate::domain::{PortUsageRecord, TerminationOutcome};
use crate::error::{Error, Result};
use crate::ports::{EnumeratorPort, SignalPort};

/// The main KillPort engine.
///
/// Every call is independent: nothing is cached and no state is shared
/// between calls.
pub struct KillPortEngine<E: EnumeratorPort = LsofEnumerator, S: SignalPort = NixSignaller> {
    discovery: DiscoveryService<E>,
    termination: TerminationService<S>,
    config: Config,
    runtime: Runtime,
}

impl KillPortEngine {
    /// Create an engine from `~/.killport/config.json` and the environment.
    pub fn new() -> Result<Self> {
        Self::with_config(Self::load_config()?)
    }

    /// Create an engine from an explicit config.
    pub fn with_config(config: Config) -> Result<Self> {
        let enumerator = LsofEnumerator::with_program(&config.lsof_path);
        Self::with_components(enumerator, NixSignaller::new(), config)
    }

    /// Read the config file and apply environment overrides.
    pub fn load_config() -> Result<Config> {
        let store = ConfigStore::new()?;
        let config = build_runtime()?
            .block_on(store.load())?
            .with_env_overrides();

        debug!(config_path = %store.path().display(), lsof = %config.lsof_path, "Loaded config");
        Ok(config)
    }
}

impl<E: EnumeratorPort, S: SignalPort> KillPortEngine<E, S> {
    /// Create an engine with injected capabilities.
    pub fn with_components(enumerator: E, signaller: S, config: Config) -> Result<Self> {
        Ok(Self {
            discovery: DiscoveryService::new(enumerator),
            termination: TerminationService::new(signaller),
            config,
            runtime: build_runtime()?,
        })
    }

    /// The effective configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Find processes bound to a single port.
    pub fn find_by_port(&self, port: &str) -> Result<Vec<PortUsageRecord>> {
        self.runtime.block_on(self.discovery.find_by_port(port))
    }

    /// Find processes bound to any of several ports, e.g. `"8080, 3000"`.
    pub fn find_by_ports(&self, input: &str) -> Result<Vec<PortUsageRecord>> {
        self.runtime.block_on(self.discovery.find_by_ports(input))
    }

    /// Find every process listening on a TCP port.
    pub fn find_all_listening(&self) -> Result<Vec<PortUsageRecord>> {
        self.runtime.block_on(self.discovery.find_all_listening())
    }

    /// Terminate one process, escalating from SIGTERM to SIGKILL.
    pub fn terminate(&self, pid: &str) -> TerminationOutcome {
        self.termination.terminate(pid)
    }

    /// Terminate several processes; outcomes follow first-occurrence order.
    pub fn terminate_batch<I, T>(&self, pids: I) -> Vec<TerminationOutcome>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.termination.terminate_batch(pids)
    }
}

// Single-threaded runtime: each call spawns at most one child and waits on it
fn build_runtime() -> Result<Runtime> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Config(format!("Failed to create runtime: {}", e)))
}
