//! Process termination service.
//!
//! # Escalation
//!
//! Each PID gets at most two signals:
//! 1. SIGTERM, which the process may catch to clean up
//! 2. SIGKILL, only if the OS rejected SIGTERM
//!
//! Success means a signal was delivered. Whether the process actually exits
//! is not checked.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::{parse_pid, TerminationOutcome};
use crate::error::{Error, Result};
use crate::ports::{SignalPort, TermSignal};

/// What to do after one signal attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Escalation {
    /// The signal was accepted; stop here.
    Delivered(TermSignal),
    /// The signal was rejected; try the next one.
    Escalate(TermSignal),
    /// The last signal was rejected; report this reason.
    GiveUp(String),
}

/// Decide the next step from the signal just sent and its result.
pub fn next_step(sent: TermSignal, attempt: &Result<()>) -> Escalation {
    match (sent, attempt) {
        (signal, Ok(())) => Escalation::Delivered(signal),
        (TermSignal::Graceful, Err(_)) => Escalation::Escalate(TermSignal::Forced),
        (TermSignal::Forced, Err(e)) => Escalation::GiveUp(diagnostic(e)),
    }
}

fn diagnostic(err: &Error) -> String {
    match err {
        Error::SignalFailed { reason, .. } => reason.clone(),
        other => other.to_string(),
    }
}

/// Application service for terminating processes by PID.
pub struct TerminationService<S: SignalPort> {
    signaller: S,
}

impl<S: SignalPort> TerminationService<S> {
    /// Create a new termination service with the given signaller.
    pub fn new(signaller: S) -> Self {
        Self { signaller }
    }

    pub fn signaller(&self) -> &S {
        &self.signaller
    }

    /// Terminate one process.
    ///
    /// Never fails as a call: invalid input and rejected signals are both
    /// reported in the outcome, which echoes `pid` exactly as given.
    pub fn terminate(&self, pid: &str) -> TerminationOutcome {
        let target = match parse_pid(pid) {
            Ok(target) => target,
            Err(e) => {
                debug!(pid = pid, "Rejected invalid PID");
                return TerminationOutcome::failure(pid, e.to_string());
            }
        };

        let mut signal = TermSignal::Graceful;
        loop {
            let attempt = self.signaller.send(target, signal);
            match next_step(signal, &attempt) {
                Escalation::Delivered(sent) => {
                    debug!(pid = target, signal = %sent, "Signal delivered");
                    return TerminationOutcome::success(
                        pid,
                        format!("process {} killed successfully ({})", target, sent),
                    );
                }
                Escalation::Escalate(next) => {
                    if let Err(e) = &attempt {
                        warn!(pid = target, error = %e, "Graceful signal failed, escalating");
                    }
                    signal = next;
                }
                Escalation::GiveUp(reason) => {
                    warn!(pid = target, %reason, "Failed to kill process");
                    return TerminationOutcome::failure(
                        pid,
                        format!("failed to kill process {}: {}", target, reason),
                    );
                }
            }
        }
    }

    /// Terminate several processes, one after another.
    ///
    /// PIDs are trimmed and deduplicated keeping the first occurrence; later
    /// duplicates produce no outcome at all. A failure for one PID never stops
    /// the rest.
    pub fn terminate_batch<I, T>(&self, pids: I) -> Vec<TerminationOutcome>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut outcomes = Vec::new();

        for pid in pids {
            let pid = pid.as_ref().trim();
            if !seen.insert(pid.to_string()) {
                debug!(pid = pid, "Skipping duplicate PID");
                continue;
            }
            outcomes.push(self.terminate(pid));
        }

        outcomes
    }
}
