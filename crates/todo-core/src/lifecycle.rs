//! Load lifecycle tracking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::context::RequestId;

/// Lifecycle phases for a single load.
///
/// A load starts `Pending` and ends in exactly one of `Succeeded` or
/// `Failed`. There are no intermediate states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// Request issued, outcome unknown.
    Pending,
    /// Envelope returned to the framework.
    Succeeded,
    /// An error was raised; carries its message.
    Failed(String),
}

impl LoadPhase {
    /// Whether this phase ends the load.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Succeeded => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}

impl std::fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failed(reason) => write!(f, "failed: {}", reason),
            other => write!(f, "{}", other.name()),
        }
    }
}

/// Timing context for observability.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: HashMap<String, Instant>,
}

impl TimingContext {
    /// Create a new timing context.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: HashMap::new(),
        }
    }

    /// Record a timing mark.
    pub fn mark(&mut self, name: &str) {
        self.marks.insert(name.to_string(), Instant::now());
    }

    /// Get elapsed time since start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Get time from start to a named mark.
    pub fn since_start(&self, name: &str) -> Option<Duration> {
        self.marks.get(name).map(|t| t.duration_since(self.start))
    }

    /// Get time between two named marks.
    pub fn between(&self, from: &str, to: &str) -> Option<Duration> {
        let from = self.marks.get(from)?;
        let to = self.marks.get(to)?;
        Some(to.saturating_duration_since(*from))
    }

    /// Check whether a mark was recorded.
    pub fn has_mark(&self, name: &str) -> bool {
        self.marks.contains_key(name)
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer trait for lifecycle events.
pub trait LoadObserver: Send + Sync {
    /// Called on every phase transition of a load.
    fn on_phase(&self, request_id: &RequestId, phase: &LoadPhase, elapsed: Duration);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_terminality() {
        assert!(!LoadPhase::Pending.is_terminal());
        assert!(LoadPhase::Succeeded.is_terminal());
        assert!(LoadPhase::Failed("boom".into()).is_terminal());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(LoadPhase::Pending.to_string(), "pending");
        assert_eq!(
            LoadPhase::Failed("Failed to fetch todos".into()).to_string(),
            "failed: Failed to fetch todos"
        );
    }

    #[test]
    fn test_timing_marks() {
        let mut timing = TimingContext::new();
        assert!(!timing.has_mark("request_sent"));

        timing.mark("request_sent");
        timing.mark("response_received");

        assert!(timing.has_mark("request_sent"));
        assert!(timing.since_start("request_sent").is_some());
        assert!(timing.between("request_sent", "response_received").is_some());
        assert!(timing.between("request_sent", "missing").is_none());
    }
}
