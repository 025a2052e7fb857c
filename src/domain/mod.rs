//! Domain models and types for Herald.
//!
//! This module contains the core domain models, types, and business rules for
//! the report pipeline.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Report dates** ([`ReportDate`], [`DateRange`]) — the correlation key
//!   for a single pipeline run and the inclusive day-by-day iterator the
//!   replay engine walks
//! - **Tabular rows** ([`ReportRow`], [`CellValue`]) — the data handed from
//!   the data source to the renderer
//! - **Error types** ([`HeraldError`], [`DataSourceError`], [`TransferError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Dates use the newtype pattern so a report date can't be mixed up with
//! other parameters:
//!
//! ```
//! use herald::domain::ReportDate;
//! use std::str::FromStr;
//!
//! let date = ReportDate::from_str("2025-01-15").unwrap();
//! assert_eq!(date.file_stamp(), "20250115");
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```
//! use herald::domain::{HeraldError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(HeraldError::Pipeline("something went sideways".to_string()))
//! }
//! ```

pub mod date;
pub mod errors;
pub mod result;
pub mod row;

// Re-export commonly used types for convenience
pub use date::{DateRange, ReportDate};
pub use errors::{DataSourceError, HeraldError, TransferError};
pub use result::Result;
pub use row::{sum_column, CellValue, ReportRow};
