//! Replay summary and reporting
//!
//! Aggregate counters for a date-range replay. The three counters always
//! partition `total`, including when a replay is interrupted early.

use std::time::Duration;

/// Summary of a range replay
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaySummary {
    /// Number of dates in the requested range
    pub total: usize,

    /// Dates whose callback completed
    pub successful: usize,

    /// Dates whose callback failed
    pub failed: usize,

    /// Dates skipped (dry-run, or not attempted after an interrupt)
    pub skipped: usize,

    /// Whether the replay stopped early on a shutdown signal
    pub interrupted: bool,

    /// Wall-clock duration of the replay
    pub duration: Duration,
}

impl ReplaySummary {
    /// Create a new empty summary
    pub fn new() -> Self {
        Self {
            total: 0,
            successful: 0,
            failed: 0,
            skipped: 0,
            interrupted: false,
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Success rate as a percentage
    ///
    /// Defined as 0.0 for an empty range so the boundary case never
    /// divides by zero.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.successful as f64 / self.total as f64) * 100.0
    }

    /// Whether every attempted date succeeded and nothing was cut short
    pub fn is_clean(&self) -> bool {
        self.failed == 0 && !self.interrupted
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total = self.total,
            successful = self.successful,
            failed = self.failed,
            skipped = self.skipped,
            interrupted = self.interrupted,
            duration_secs = self.duration.as_secs(),
            success_rate = format!("{:.2}%", self.success_rate()),
            "Range replay completed"
        );

        if self.failed > 0 {
            tracing::warn!(
                failed = self.failed,
                "Range replay completed with failed dates"
            );
        }
    }
}

impl Default for ReplaySummary {
    fn default() -> Self {
        Self::new()
    }
}
