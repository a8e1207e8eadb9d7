//! Up/down classification policy.

use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;

/// Binary outcome of one probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeOutcome {
    Up,
    Down,
}

impl ProbeOutcome {
    pub fn is_up(self) -> bool {
        self == ProbeOutcome::Up
    }

    /// Metric label value.
    pub fn as_str(self) -> &'static str {
        match self {
            ProbeOutcome::Up => "up",
            ProbeOutcome::Down => "down",
        }
    }
}

/// Classify a completed response.
///
/// Up iff the status is 2xx and the response arrived strictly before `threshold`.
pub fn classify(status: StatusCode, elapsed: Duration, threshold: Duration) -> ProbeOutcome {
    if status.is_success() && elapsed < threshold {
        ProbeOutcome::Up
    } else {
        ProbeOutcome::Down
    }
}
