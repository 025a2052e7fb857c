//! Configuration management for Herald.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Herald uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`HERALD_*` prefix)
//! - Default values for optional settings
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use herald::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("herald.toml")?;
//!
//! println!("Database host: {}", config.database.host);
//! println!("Output directory: {}", config.report.output_dir);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//! dry_run = false
//!
//! [database]
//! host = "db.example.com"
//! dbname = "sales"
//! user = "herald"
//! password = "${HERALD_DATABASE_PASSWORD}"
//!
//! [report]
//! output_dir = "reports"
//! file_prefix = "daily_report"
//! headers = ["Id", "Product", "Amount"]
//! count_query = "SELECT COUNT(*) FROM transactions WHERE transaction_date::date = $1"
//! data_query = "SELECT id, product, amount FROM transactions WHERE transaction_date::date = $1"
//!
//! [report.format]
//! locale = "european"
//! decimals = 2
//!
//! [email]
//! enabled = true
//! smtp_host = "smtp.example.com"
//! sender = "reports@example.com"
//! recipients = ["ops@example.com"]
//! ```
//!
//! Secrets (`database.password`, `email.password`, `ftp.password`) are held
//! as [`SecretString`] and never appear in Debug output or logs.

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, DatabaseConfig, EmailConfig, FtpConfig, HeraldConfig, LoggingConfig,
    NumberLocale, ReportConfig, ReportFormatConfig,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
