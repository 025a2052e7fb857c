//! Report processor - single-date pipeline orchestrator
//!
//! Composes the data source, renderer, transfer client, and notifier into
//! one run for one date: existence check, extract, render, best-effort
//! distribution, notification. A run never lets a fault escape to the
//! caller; every failure is folded into the returned [`ProcessResult`].

use crate::adapters::traits::{ArtifactRenderer, DataSource, Notifier, TransferClient};
use crate::config::schema::HeraldConfig;
use crate::core::pipeline::outcome::{ProcessResult, RunOutcome};
use crate::domain::date::ReportDate;
use crate::domain::result::Result;
use crate::domain::row::sum_column;
use std::path::Path;
use std::sync::Arc;

/// Per-run switches, independent of each other
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Attempt FTP distribution of the artifact
    pub transfer: bool,

    /// Send outcome notifications
    pub notify: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            transfer: true,
            notify: true,
        }
    }
}

/// Process-wide settings fixed at construction time
///
/// Dry-run in particular is deliberately a constructor-time field rather
/// than ambient state, so tests can exercise both modes side by side.
#[derive(Debug, Clone, Default)]
pub struct ProcessorSettings {
    /// Column headers for the artifact; empty for no header row
    pub headers: Vec<String>,

    /// Worksheet name
    pub sheet_name: String,

    /// Column summed for the amount quoted in success notifications
    pub summary_column: Option<usize>,

    /// Rehearsal mode: stop after the existence check, produce nothing
    pub dry_run: bool,
}

impl ProcessorSettings {
    /// Derive processor settings from the loaded configuration
    pub fn from_config(config: &HeraldConfig) -> Self {
        Self {
            headers: config.report.headers.clone(),
            sheet_name: config.report.sheet_name.clone(),
            summary_column: config.report.summary_column,
            dry_run: config.application.dry_run,
        }
    }
}

/// Single-date pipeline orchestrator
pub struct ReportProcessor {
    source: Arc<dyn DataSource>,
    renderer: Arc<dyn ArtifactRenderer>,
    transfer: Option<Arc<dyn TransferClient>>,
    notifier: Arc<dyn Notifier>,
    settings: ProcessorSettings,
}

impl ReportProcessor {
    /// Create a processor over the given adapters
    ///
    /// The data source connection is owned by the adapter and reused across
    /// dates; the transfer connection is scoped per distribution attempt.
    pub fn new(
        source: Arc<dyn DataSource>,
        renderer: Arc<dyn ArtifactRenderer>,
        transfer: Option<Arc<dyn TransferClient>>,
        notifier: Arc<dyn Notifier>,
        settings: ProcessorSettings,
    ) -> Self {
        Self {
            source,
            renderer,
            transfer,
            notifier,
            settings,
        }
    }

    /// Whether the processor runs in rehearsal mode
    pub fn is_dry_run(&self) -> bool {
        self.settings.dry_run
    }

    /// Run the pipeline for one date
    ///
    /// Never returns an error: adapter failures become a failed
    /// [`ProcessResult`], with an error notification attempted when
    /// notifications are enabled and dry-run is off.
    pub async fn process(
        &self,
        date: ReportDate,
        output_path: &Path,
        options: &RunOptions,
    ) -> ProcessResult {
        tracing::info!(
            date = %date,
            output = %output_path.display(),
            transfer = options.transfer,
            notify = options.notify,
            dry_run = self.settings.dry_run,
            "Starting report run"
        );

        match self.run_pipeline(date, output_path, options).await {
            Ok(outcome) => outcome.into(),
            Err(e) => {
                tracing::error!(date = %date, error = %e, "Report run failed");
                if options.notify && !self.settings.dry_run {
                    if let Err(notify_err) =
                        self.notifier.notify_error(&e.to_string(), date, true).await
                    {
                        tracing::warn!(
                            date = %date,
                            error = %notify_err,
                            "Failed to send error notification"
                        );
                    }
                }
                ProcessResult::failed(e.to_string())
            }
        }
    }

    async fn run_pipeline(
        &self,
        date: ReportDate,
        output_path: &Path,
        options: &RunOptions,
    ) -> Result<RunOutcome> {
        let (exists, count) = self.source.exists_for_date(date).await?;
        if !exists {
            tracing::warn!(date = %date, "No data available");
            if options.notify {
                self.notifier.notify_no_data(date).await?;
            }
            return Ok(RunOutcome::NoData);
        }
        tracing::debug!(date = %date, count, "Existence check found data");

        if self.settings.dry_run {
            tracing::info!(date = %date, "Dry run: skipping extraction and render");
            return Ok(RunOutcome::Rehearsal);
        }

        let rows = self.source.fetch_report_rows(date).await?;
        if rows.is_empty() {
            // The count query and the extraction query may use different
            // predicates, so a positive existence check does not guarantee
            // rows here.
            tracing::warn!(date = %date, "Extraction returned no rows");
            return Ok(RunOutcome::EmptyExtract);
        }
        let records = rows.len();

        let headers = if self.settings.headers.is_empty() {
            None
        } else {
            Some(self.settings.headers.as_slice())
        };
        let sheet_name = if self.settings.sheet_name.is_empty() {
            None
        } else {
            Some(self.settings.sheet_name.as_str())
        };
        self.renderer.render(&rows, headers, output_path, sheet_name)?;
        tracing::info!(
            date = %date,
            records,
            artifact = %output_path.display(),
            "Artifact rendered"
        );

        if options.transfer && !self.settings.dry_run {
            if let Some(transfer) = &self.transfer {
                self.distribute(transfer.as_ref(), output_path, date).await;
            }
        }

        if options.notify && !self.settings.dry_run {
            let total_amount = self
                .settings
                .summary_column
                .map(|index| sum_column(&rows, index));
            self.notifier
                .notify_success(date, Some(output_path), records, total_amount)
                .await?;
        }

        Ok(RunOutcome::Completed {
            records,
            artifact: output_path.to_path_buf(),
        })
    }

    /// Best-effort distribution: failures are logged and swallowed, never
    /// altering the run outcome.
    async fn distribute(&self, transfer: &dyn TransferClient, artifact: &Path, date: ReportDate) {
        if let Err(e) = Self::try_distribute(transfer, artifact).await {
            tracing::warn!(
                date = %date,
                artifact = %artifact.display(),
                error = %e,
                "Artifact distribution failed; continuing"
            );
        }
    }

    async fn try_distribute(transfer: &dyn TransferClient, artifact: &Path) -> Result<()> {
        transfer.validate(artifact, None)?;

        if !transfer.connect().await? {
            tracing::debug!("Transfer channel disabled; skipping upload");
            return Ok(());
        }

        // Disconnect on the failure path too before surfacing the error.
        let uploaded = transfer.upload(artifact, None).await;
        transfer.disconnect().await;
        uploaded?;

        tracing::info!(artifact = %artifact.display(), "Artifact uploaded");
        Ok(())
    }
}
