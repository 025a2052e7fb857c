//! Core business logic for Herald.
//!
//! This module contains the orchestration logic of the report pipeline.
//!
//! # Modules
//!
//! - [`pipeline`] - Single-date orchestration (existence check, extract,
//!   render, best-effort distribution, notification)
//! - [`replay`] - Date-range replay driving the single-date pipeline day by
//!   day with per-date failure isolation
//!
//! # Pipeline Workflow
//!
//! The single-date run:
//!
//! 1. **Check**: ask the data source whether rows exist for the date
//! 2. **Extract**: fetch the report rows (skipped entirely in dry-run)
//! 3. **Render**: write rows and headers to the spreadsheet artifact
//! 4. **Distribute** (best-effort): upload the artifact over FTP; failure
//!    here never fails the run
//! 5. **Notify**: send the outcome notification
//!
//! # Example
//!
//! ```rust,no_run
//! use herald::core::pipeline::{ProcessorSettings, ReportProcessor, RunOptions};
//! use herald::core::replay::ReplayEngine;
//! use herald::domain::ReportDate;
//! use std::str::FromStr;
//!
//! # async fn example(processor: ReportProcessor) -> Result<(), Box<dyn std::error::Error>> {
//! let engine = ReplayEngine::new("reports");
//! let start = ReportDate::from_str("2025-01-01")?;
//! let end = ReportDate::from_str("2025-01-31")?;
//!
//! let summary = engine
//!     .reprocess(start, end, false, None, |date| {
//!         let processor = &processor;
//!         async move {
//!             let output = std::path::PathBuf::from(format!("reports/daily_{}.xlsx", date.file_stamp()));
//!             let result = processor.process(date, &output, &RunOptions::default()).await;
//!             if result.success {
//!                 Ok(())
//!             } else {
//!                 Err(herald::domain::HeraldError::Pipeline(
//!                     result.error.unwrap_or_default(),
//!                 ))
//!             }
//!         }
//!     })
//!     .await?;
//!
//! println!("Processed {} dates, {} failed", summary.total, summary.failed);
//! # Ok(())
//! # }
//! ```

pub mod pipeline;
pub mod replay;
