//! Socket enumeration through `lsof`.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::ports::{EnumeratorPort, Listing, Scope};

/// Program name used when no explicit path is configured.
pub const DEFAULT_LSOF: &str = "lsof";

/// lsof's exit status for "no matching files".
const NO_MATCHES_EXIT_CODE: i32 = 1;

/// Enumerator backed by the `lsof` command.
#[derive(Debug, Clone)]
pub struct LsofEnumerator {
    program: PathBuf,
}

impl LsofEnumerator {
    /// Create an enumerator that runs `lsof` from `PATH`.
    pub fn new() -> Self {
        Self::with_program(DEFAULT_LSOF)
    }

    /// Create an enumerator that runs the given lsof binary.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Command line arguments for a scope.
    ///
    /// Flags explained:
    /// - -i :PORT / -iTCP: Select internet sockets (by port, or TCP only)
    /// - -sTCP:LISTEN: Show only listening sockets
    /// - -P: Show port numbers (don't resolve to service names)
    /// - -n: Show IP addresses (don't resolve to hostnames)
    pub fn args(scope: Scope) -> Vec<String> {
        let mut args = match scope {
            Scope::Port(port) => vec!["-i".to_string(), format!(":{}", port)],
            Scope::AllListening => vec!["-iTCP".to_string(), "-sTCP:LISTEN".to_string()],
        };
        args.push("-P".to_string());
        args.push("-n".to_string());
        args
    }
}

impl Default for LsofEnumerator {
    fn default() -> Self {
        Self::new()
    }
}

impl EnumeratorPort for LsofEnumerator {
    async fn list(&self, scope: Scope) -> Result<Listing> {
        let args = Self::args(scope);
        debug!(program = %self.program.display(), ?args, "Running lsof");

        let output = Command::new(&self.program)
            .args(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                warn!(program = %self.program.display(), error = %e, "Failed to spawn lsof");
                Error::EnumerationFailed(e.to_string())
            })?;

        classify_exit(output.status.code(), &output.stdout, &output.stderr)
    }
}

/// Map lsof's exit status and output onto a listing.
///
/// Exit 0 is parsed normally. Exit 1 with nothing on stdout is lsof's way of
/// saying nothing matched; exit 1 with rows still carries usable output.
/// Anything else is a failure carrying stderr.
pub fn classify_exit(code: Option<i32>, stdout: &[u8], stderr: &[u8]) -> Result<Listing> {
    let text = String::from_utf8_lossy(stdout);

    match code {
        Some(0) => Ok(Listing::Output(text.into_owned())),
        Some(NO_MATCHES_EXIT_CODE) if text.trim().is_empty() => {
            debug!("lsof found no matching sockets");
            Ok(Listing::NoMatches)
        }
        Some(NO_MATCHES_EXIT_CODE) => Ok(Listing::Output(text.into_owned())),
        Some(code) => {
            let diagnostic = String::from_utf8_lossy(stderr).trim().to_string();
            warn!(code, %diagnostic, "lsof failed");
            if diagnostic.is_empty() {
                Err(Error::EnumerationFailed(format!("exit status {}", code)))
            } else {
                Err(Error::EnumerationFailed(diagnostic))
            }
        }
        None => Err(Error::EnumerationFailed(
            "lsof was terminated by a signal".to_string(),
        )),
    }
}
