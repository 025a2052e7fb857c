// Herald - Scheduled Report Pipeline
// Copyright (c) 2025 Herald Contributors
// Licensed under the MIT License

//! # Herald - Scheduled Report Pipeline
//!
//! Herald generates and delivers daily spreadsheet reports from a
//! relational store: it checks whether source data exists for a date,
//! extracts the rows, renders them into an xlsx artifact, and optionally
//! distributes the artifact by FTP and email notification.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Checking** data existence per calendar date before doing any work
//! - **Extracting** report rows with configurable parameterized SQL
//! - **Rendering** rows into spreadsheet artifacts with locale-aware
//!   numeric formatting
//! - **Distributing** artifacts over FTP as a best-effort step
//! - **Notifying** recipients of every terminal outcome by email
//! - **Replaying** date ranges day by day with per-date failure isolation
//!
//! ## Architecture
//!
//! Herald follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (single-date pipeline, range replay)
//! - [`adapters`] - External integrations (PostgreSQL, xlsx, FTP, SMTP)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use herald::config::load_config;
//! use herald::core::pipeline::{ProcessorSettings, ReportProcessor, RunOptions};
//! use herald::domain::ReportDate;
//! use std::str::FromStr;
//!
//! # async fn example(processor: ReportProcessor) -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("herald.toml")?;
//! let date = ReportDate::from_str("2025-01-15")?;
//! let output = config.report.output_path_for(date);
//!
//! let result = processor.process(date, &output, &RunOptions::default()).await;
//!
//! println!("Processed {} records", result.records_processed);
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure Policy
//!
//! The single-date pipeline never raises to its caller: every failure is
//! folded into the returned `ProcessResult`, and an error notification is
//! attempted when notifications are enabled. FTP distribution is
//! best-effort by design; a failed upload is logged and swallowed without
//! altering the run outcome. The replay engine isolates failures per date
//! so one bad day never aborts the range.
//!
//! ## Error Handling
//!
//! Herald uses the [`domain::HeraldError`] type for all errors:
//!
//! ```rust,no_run
//! use herald::domain::HeraldError;
//!
//! fn example() -> Result<(), HeraldError> {
//!     let config = herald::config::load_config("herald.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Herald uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting report run");
//! warn!(date = "2025-01-15", "No data available");
//! error!(error = "connection refused", "Run failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
