//! Adapter port traits
//!
//! This module defines the narrow interfaces the pipeline core depends on.
//! The orchestrator only ever sees these traits; concrete adapters (the
//! pooled Postgres client, the xlsx renderer, the FTP client, the SMTP
//! notifier) implement them, and tests substitute hand-rolled mocks.

use crate::domain::date::ReportDate;
use crate::domain::result::Result;
use crate::domain::row::ReportRow;
use async_trait::async_trait;
use std::path::Path;

/// Data source port: answers existence checks and extracts report rows
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Check whether any rows exist for the given date
    ///
    /// Returns `(exists, count)`. The count comes from the configured
    /// existence-check query and may diverge from what a later extraction
    /// returns.
    ///
    /// # Errors
    ///
    /// Returns an error on connectivity or query failure.
    async fn exists_for_date(&self, date: ReportDate) -> Result<(bool, i64)>;

    /// Fetch the report rows for the given date
    ///
    /// # Errors
    ///
    /// Returns an error on connectivity, query, or row-decoding failure.
    async fn fetch_report_rows(&self, date: ReportDate) -> Result<Vec<ReportRow>>;
}

/// Artifact renderer port: rows + headers to a persisted spreadsheet
pub trait ArtifactRenderer: Send + Sync {
    /// Render rows (and an optional header row) to `destination`
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot be written.
    fn render(
        &self,
        rows: &[ReportRow],
        headers: Option<&[String]>,
        destination: &Path,
        sheet_name: Option<&str>,
    ) -> Result<()>;
}

/// Transfer port: uploads a local artifact to a remote endpoint
///
/// The connection is scoped per distribution attempt: `connect`, `upload`,
/// `disconnect`, with `disconnect` guaranteed on both success and failure
/// paths by the caller.
#[async_trait]
pub trait TransferClient: Send + Sync {
    /// Validate the local file before attempting an upload
    ///
    /// # Errors
    ///
    /// Returns a validation error if the file is missing or exceeds the
    /// size cap (the explicit `max_size_mb`, or the configured cap when
    /// `None`).
    fn validate(&self, path: &Path, max_size_mb: Option<u64>) -> Result<bool>;

    /// Open the remote connection
    ///
    /// Returns `Ok(false)` without connecting when the channel is
    /// administratively disabled.
    ///
    /// # Errors
    ///
    /// Returns an error on connect or login failure.
    async fn connect(&self) -> Result<bool>;

    /// Upload a local file, optionally under a different remote name
    ///
    /// Returns `Ok(false)` when the channel is disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is open or the upload fails.
    async fn upload(&self, local: &Path, remote_name: Option<&str>) -> Result<bool>;

    /// Close the remote connection
    ///
    /// Idempotent and infallible: closing an already-closed connection is a
    /// no-op, and close failures are swallowed.
    async fn disconnect(&self);
}

/// Notifier port: outcome notifications for a report date
///
/// Every method is a no-op returning `Ok(false)` when the channel is
/// administratively disabled.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Notify that the report for `date` was generated
    ///
    /// # Errors
    ///
    /// Returns an error if the notification cannot be delivered.
    async fn notify_success(
        &self,
        date: ReportDate,
        artifact: Option<&Path>,
        records: usize,
        total_amount: Option<f64>,
    ) -> Result<bool>;

    /// Notify that no source data exists for `date`
    ///
    /// # Errors
    ///
    /// Returns an error if the notification cannot be delivered.
    async fn notify_no_data(&self, date: ReportDate) -> Result<bool>;

    /// Notify that the run for `date` failed
    ///
    /// With `include_detail` set, the error text is carried in the body;
    /// otherwise a generic failure notice is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification cannot be delivered.
    async fn notify_error(&self, error: &str, date: ReportDate, include_detail: bool)
        -> Result<bool>;
}
