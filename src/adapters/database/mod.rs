//! Relational data source adapter
//!
//! Pooled PostgreSQL client answering the two questions the pipeline asks:
//! "does data exist for this date?" and "give me the rows for this date".

pub mod client;

pub use client::ReportDataSource;
