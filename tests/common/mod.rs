//! Hand-rolled mock adapters over the pipeline port traits
//!
//! Each mock counts its invocations with atomics so tests can assert which
//! pipeline steps ran.

use async_trait::async_trait;
use herald::adapters::traits::{ArtifactRenderer, DataSource, Notifier, TransferClient};
use herald::domain::date::ReportDate;
use herald::domain::errors::{DataSourceError, HeraldError, TransferError};
use herald::domain::result::Result;
use herald::domain::row::{CellValue, ReportRow};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Two sample rows with a text and a numeric column
pub fn sample_rows() -> Vec<ReportRow> {
    vec![
        ReportRow::new(vec![
            CellValue::Text("Laptop".to_string()),
            CellValue::Number(1299.99),
        ]),
        ReportRow::new(vec![
            CellValue::Text("Mouse".to_string()),
            CellValue::Number(29.99),
        ]),
    ]
}

#[derive(Default)]
pub struct MockSource {
    pub exists: bool,
    pub count: i64,
    pub rows: Vec<ReportRow>,
    pub fail_fetch: bool,
    pub exists_calls: AtomicUsize,
    pub fetch_calls: AtomicUsize,
}

impl MockSource {
    pub fn no_data() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<ReportRow>) -> Self {
        Self {
            exists: true,
            count: rows.len() as i64,
            rows,
            ..Self::default()
        }
    }

    /// Positive existence check whose extraction comes back empty
    pub fn empty_extract() -> Self {
        Self {
            exists: true,
            count: 5,
            ..Self::default()
        }
    }

    pub fn failing_fetch() -> Self {
        Self {
            exists: true,
            count: 1,
            fail_fetch: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl DataSource for MockSource {
    async fn exists_for_date(&self, _date: ReportDate) -> Result<(bool, i64)> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        Ok((self.exists, self.count))
    }

    async fn fetch_report_rows(&self, _date: ReportDate) -> Result<Vec<ReportRow>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch {
            return Err(DataSourceError::QueryFailed("mock fetch failure".to_string()).into());
        }
        Ok(self.rows.clone())
    }
}

#[derive(Default)]
pub struct MockRenderer {
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl ArtifactRenderer for MockRenderer {
    fn render(
        &self,
        _rows: &[ReportRow],
        _headers: Option<&[String]>,
        _destination: &Path,
        _sheet_name: Option<&str>,
    ) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(HeraldError::Render("mock render failure".to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MockTransfer {
    /// Simulate an administratively disabled channel
    pub channel_disabled: bool,
    pub fail_connect: bool,
    pub fail_upload: bool,
    pub connect_calls: AtomicUsize,
    pub upload_calls: AtomicUsize,
    pub disconnect_calls: AtomicUsize,
}

#[async_trait]
impl TransferClient for MockTransfer {
    fn validate(&self, _path: &Path, _max_size_mb: Option<u64>) -> Result<bool> {
        Ok(true)
    }

    async fn connect(&self) -> Result<bool> {
        self.connect_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_connect {
            return Err(TransferError::ConnectionFailed("mock connect failure".to_string()).into());
        }
        Ok(!self.channel_disabled)
    }

    async fn upload(&self, _local: &Path, _remote_name: Option<&str>) -> Result<bool> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_upload {
            return Err(TransferError::UploadFailed("mock upload failure".to_string()).into());
        }
        Ok(true)
    }

    async fn disconnect(&self) {
        self.disconnect_calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct MockNotifier {
    pub success_calls: AtomicUsize,
    pub no_data_calls: AtomicUsize,
    pub error_calls: AtomicUsize,
    /// Records and total amount from the last success notification
    pub last_success: Mutex<Option<(usize, Option<f64>)>>,
    /// Error text from the last error notification
    pub last_error: Mutex<Option<String>>,
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify_success(
        &self,
        _date: ReportDate,
        _artifact: Option<&Path>,
        records: usize,
        total_amount: Option<f64>,
    ) -> Result<bool> {
        self.success_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_success.lock().unwrap() = Some((records, total_amount));
        Ok(true)
    }

    async fn notify_no_data(&self, _date: ReportDate) -> Result<bool> {
        self.no_data_calls.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    async fn notify_error(
        &self,
        error: &str,
        _date: ReportDate,
        _include_detail: bool,
    ) -> Result<bool> {
        self.error_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_error.lock().unwrap() = Some(error.to_string());
        Ok(true)
    }
}
