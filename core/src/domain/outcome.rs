//! Termination outcomes.

use serde::{Deserialize, Serialize};

/// Result of one termination attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminationOutcome {
    /// PID exactly as the caller supplied it.
    pub pid: String,
    /// Whether a signal was delivered.
    pub succeeded: bool,
    /// Human readable confirmation or failure reason.
    pub message: String,
}

impl TerminationOutcome {
    pub fn success(pid: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pid: pid.into(),
            succeeded: true,
            message: message.into(),
        }
    }

    pub fn failure(pid: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pid: pid.into(),
            succeeded: false,
            message: message.into(),
        }
    }
}

/// Counts over a batch of outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminationSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl TerminationSummary {
    pub fn from_outcomes(outcomes: &[TerminationOutcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.succeeded).count();
        Self {
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

impl std::fmt::Display for TerminationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} killed, {} failed", self.succeeded, self.failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let outcomes = vec![
            TerminationOutcome::success("111", "ok"),
            TerminationOutcome::failure("abc", "invalid PID: abc"),
            TerminationOutcome::success("222", "ok"),
        ];

        let summary = TerminationSummary::from_outcomes(&outcomes);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
        assert!(!summary.all_succeeded());
        assert_eq!(summary.to_string(), "2 killed, 1 failed");
    }

    #[test]
    fn test_empty_summary() {
        assert!(TerminationSummary::from_outcomes(&[]).all_succeeded());
    }
}
