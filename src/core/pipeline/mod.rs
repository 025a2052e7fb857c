//! Single-date pipeline orchestration
//!
//! This module provides the report processor and its result types:
//! - Existence check, extraction, render, best-effort distribution,
//!   notification for one date
//! - Tagged terminal outcomes and the flattened [`ProcessResult`] record

pub mod outcome;
pub mod processor;

pub use outcome::{ProcessResult, RunOutcome, EMPTY_EXTRACT_ERROR, NO_DATA_ERROR};
pub use processor::{ProcessorSettings, ReportProcessor, RunOptions};
