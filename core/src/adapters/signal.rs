//! Signal delivery through `kill(2)`.

use tracing::debug;

use crate::error::{Error, Result};
use crate::ports::{SignalPort, TermSignal};

/// Delivers signals with the POSIX `kill` system call.
///
/// On non-Unix targets every delivery fails with `UnsupportedPlatform`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NixSignaller;

impl NixSignaller {
    pub fn new() -> Self {
        Self
    }
}

impl SignalPort for NixSignaller {
    #[cfg(unix)]
    fn send(&self, pid: i32, signal: TermSignal) -> Result<()> {
        use nix::sys::signal::{kill, Signal};
        use nix::unistd::Pid;

        let raw = match signal {
            TermSignal::Graceful => Signal::SIGTERM,
            TermSignal::Forced => Signal::SIGKILL,
        };

        debug!(pid = pid, signal = %signal, "Sending signal to process");
        kill(Pid::from_raw(pid), raw).map_err(|errno| Error::SignalFailed {
            pid,
            signal: signal.name().to_string(),
            reason: errno.desc().to_string(),
        })
    }

    #[cfg(not(unix))]
    fn send(&self, pid: i32, signal: TermSignal) -> Result<()> {
        debug!(pid = pid, signal = %signal, "Signals are not available on this platform");
        Err(Error::UnsupportedPlatform(format!(
            "cannot send {} to process {}",
            signal, pid
        )))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;
    use std::process::Command;

    #[test]
    fn test_graceful_signal_terminates_child() {
        let mut child = Command::new("sleep").arg("30").spawn().unwrap();

        NixSignaller::new()
            .send(child.id() as i32, TermSignal::Graceful)
            .unwrap();

        let status = child.wait().unwrap();
        assert_eq!(status.signal(), Some(15));
    }

    #[test]
    fn test_forced_signal_terminates_child() {
        let mut child = Command::new("sleep").arg("30").spawn().unwrap();

        NixSignaller::new()
            .send(child.id() as i32, TermSignal::Forced)
            .unwrap();

        let status = child.wait().unwrap();
        assert_eq!(status.signal(), Some(9));
    }

    #[test]
    fn test_nonexistent_process_fails() {
        // Above the largest pid_max Linux and macOS allow
        let err = NixSignaller::new()
            .send(999_999_999, TermSignal::Graceful)
            .unwrap_err();

        match err {
            Error::SignalFailed { pid, signal, .. } => {
                assert_eq!(pid, 999_999_999);
                assert_eq!(signal, "SIGTERM");
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
