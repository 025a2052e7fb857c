//! Logging and observability
//!
//! Structured logging with configurable log levels, console output, and
//! optional rolling JSON file logs.
//!
//! # Example
//!
//! ```no_run
//! use herald::logging::init_logging;
//! use herald::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
