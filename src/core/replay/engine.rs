//! Date-range replay engine
//!
//! Drives the single-date pipeline across a contiguous span of dates. Each
//! date is an isolated unit of work: one date failing never aborts the
//! range. The engine knows nothing about what the callback does, only its
//! success or failure.

use crate::core::replay::summary::ReplaySummary;
use crate::domain::date::{DateRange, ReportDate};
use crate::domain::errors::HeraldError;
use crate::domain::result::Result;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::sync::watch;

/// Configuration artifact the replay environment must contain
pub const CONFIG_FILE_NAME: &str = "herald.toml";

/// Date-range replay engine
pub struct ReplayEngine {
    report_dir: PathBuf,
}

impl ReplayEngine {
    /// Create an engine rooted at the report working directory
    pub fn new(report_dir: impl Into<PathBuf>) -> Self {
        Self {
            report_dir: report_dir.into(),
        }
    }

    /// The report working directory the engine validates against
    pub fn report_dir(&self) -> &Path {
        &self.report_dir
    }

    /// Validate that the replay environment exists
    ///
    /// The report directory and the configuration file inside it must both
    /// exist before any date is attempted.
    ///
    /// # Errors
    ///
    /// Returns a pipeline error naming the missing path.
    pub fn validate_environment(&self) -> Result<()> {
        if !self.report_dir.exists() {
            return Err(HeraldError::Pipeline(format!(
                "Report path not found: {}",
                self.report_dir.display()
            )));
        }

        let config_path = self.report_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Err(HeraldError::Pipeline(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }

        Ok(())
    }

    /// Replay a date range through the per-date callback
    ///
    /// Walks every day from `start` to `end` inclusive, in ascending order.
    /// Dry-run counts each date as skipped without invoking the callback.
    /// A callback error is counted and logged; the next date still runs.
    /// When the shutdown signal flips, the remaining dates are counted as
    /// skipped and the summary is flagged interrupted, keeping the counter
    /// partition intact.
    ///
    /// # Errors
    ///
    /// Returns an error when `start > end` (checked first) or when the
    /// environment validation fails; per-date failures never propagate.
    pub async fn reprocess<F, Fut>(
        &self,
        start: ReportDate,
        end: ReportDate,
        dry_run: bool,
        shutdown: Option<watch::Receiver<bool>>,
        mut per_date: F,
    ) -> Result<ReplaySummary>
    where
        F: FnMut(ReportDate) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        if start > end {
            return Err(HeraldError::Pipeline(
                "Start date must be <= end date".to_string(),
            ));
        }

        self.validate_environment()?;

        let started_at = Instant::now();
        let range = DateRange::new(start, end);
        let mut summary = ReplaySummary::new();
        summary.total = range.len();

        tracing::info!(
            start = %start,
            end = %end,
            total = summary.total,
            dry_run,
            "Starting range replay"
        );

        let mut remaining = summary.total;
        for date in range {
            if let Some(shutdown) = &shutdown {
                if *shutdown.borrow() {
                    tracing::warn!(
                        date = %date,
                        remaining,
                        "Shutdown requested; remaining dates skipped"
                    );
                    summary.interrupted = true;
                    summary.skipped += remaining;
                    break;
                }
            }
            remaining -= 1;

            if dry_run {
                tracing::info!(date = %date, "Dry run: date skipped");
                summary.skipped += 1;
                continue;
            }

            match per_date(date).await {
                Ok(()) => {
                    summary.successful += 1;
                    tracing::debug!(date = %date, "Date processed");
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!(date = %date, error = %e, "Date failed; continuing");
                }
            }
        }

        let summary = summary.with_duration(started_at.elapsed());
        summary.log_summary();
        Ok(summary)
    }
}
