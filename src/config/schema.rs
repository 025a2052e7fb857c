//! Configuration schema types
//!
//! This module defines the configuration structure for Herald. Each section
//! maps to a TOML table and knows how to validate itself.

use crate::config::SecretString;
use crate::domain::date::ReportDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Numeric formatting style for spreadsheet cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NumberLocale {
    /// Dot thousands grouping, comma decimal separator (`1.234,56`)
    #[default]
    European,
    /// Comma thousands grouping, dot decimal separator (`1,234.56`)
    Anglo,
}

/// Main Herald configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeraldConfig {
    /// Application-level settings
    pub application: ApplicationConfig,

    /// Relational data source connection
    pub database: DatabaseConfig,

    /// Report extraction and rendering settings
    pub report: ReportConfig,

    /// Email notification settings
    #[serde(default)]
    pub email: EmailConfig,

    /// FTP distribution settings
    #[serde(default)]
    pub ftp: FtpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HeraldConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value found.
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.database.validate()?;
        self.report.validate()?;
        self.email.validate()?;
        self.ftp.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (check data existence only, produce no artifacts)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Relational data source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database host
    pub host: String,

    /// Database port
    #[serde(default = "default_db_port")]
    pub port: u16,

    /// Database name
    pub dbname: String,

    /// Database user
    pub user: String,

    /// Database password
    /// Stored securely in memory and zeroized on drop
    pub password: SecretString,

    /// Maximum pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,

    /// Timeout for obtaining a pooled connection
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout_seconds: u64,
}

impl DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("database.host cannot be empty".to_string());
        }
        if self.dbname.is_empty() {
            return Err("database.dbname cannot be empty".to_string());
        }
        if self.user.is_empty() {
            return Err("database.user cannot be empty".to_string());
        }
        if self.max_connections == 0 {
            return Err("database.max_connections must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Report extraction and rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory artifacts are written into
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// File name prefix; artifacts are named `{prefix}_{YYYYMMDD}.xlsx`
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Worksheet name inside the artifact
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    /// Column headers for the first worksheet row; empty for no header row
    #[serde(default)]
    pub headers: Vec<String>,

    /// Existence-check SQL; must return a single count and bind the report
    /// date as `$1`
    pub count_query: String,

    /// Extraction SQL; binds the report date as `$1`
    ///
    /// Deliberately independent of `count_query`: the two may use different
    /// predicates, which is why a positive existence check can still be
    /// followed by an empty extraction.
    pub data_query: String,

    /// Zero-based column index summed for the amount quoted in success
    /// notifications
    #[serde(default)]
    pub summary_column: Option<usize>,

    /// Numeric cell formatting
    #[serde(default)]
    pub format: ReportFormatConfig,
}

impl ReportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.is_empty() {
            return Err("report.output_dir cannot be empty".to_string());
        }
        if self.file_prefix.is_empty() {
            return Err("report.file_prefix cannot be empty".to_string());
        }
        if self.count_query.is_empty() {
            return Err("report.count_query cannot be empty".to_string());
        }
        if self.data_query.is_empty() {
            return Err("report.data_query cannot be empty".to_string());
        }
        if !self.count_query.contains("$1") {
            return Err("report.count_query must bind the report date as $1".to_string());
        }
        if !self.data_query.contains("$1") {
            return Err("report.data_query must bind the report date as $1".to_string());
        }
        self.format.validate()?;
        Ok(())
    }

    /// Default artifact path for a report date
    pub fn output_path_for(&self, date: ReportDate) -> PathBuf {
        PathBuf::from(&self.output_dir).join(format!(
            "{}_{}.xlsx",
            self.file_prefix,
            date.file_stamp()
        ))
    }
}

/// Numeric cell formatting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFormatConfig {
    /// Grouping/decimal separator style
    #[serde(default)]
    pub locale: NumberLocale,

    /// Decimal places for numeric cells
    #[serde(default = "default_decimals")]
    pub decimals: u32,
}

impl ReportFormatConfig {
    fn validate(&self) -> Result<(), String> {
        if self.decimals > 8 {
            return Err(format!(
                "report.format.decimals must be at most 8, got {}",
                self.decimals
            ));
        }
        Ok(())
    }
}

impl Default for ReportFormatConfig {
    fn default() -> Self {
        Self {
            locale: NumberLocale::European,
            decimals: default_decimals(),
        }
    }
}

/// Email notification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Whether notifications are sent at all
    #[serde(default)]
    pub enabled: bool,

    /// SMTP server host
    #[serde(default)]
    pub smtp_host: String,

    /// SMTP server port
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// Use implicit TLS instead of plain SMTP
    #[serde(default)]
    pub use_ssl: bool,

    /// Sender address
    #[serde(default)]
    pub sender: String,

    /// Sender password (optional for unauthenticated relays)
    #[serde(default)]
    pub password: Option<SecretString>,

    /// Recipients for success and no-data notifications
    #[serde(default)]
    pub recipients: Vec<String>,

    /// Recipients for error notifications; falls back to `recipients`
    #[serde(default)]
    pub error_recipients: Vec<String>,

    /// Attachment size cap in megabytes
    #[serde(default = "default_max_attachment_mb")]
    pub max_attachment_mb: u64,
}

impl EmailConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }
        if self.smtp_host.is_empty() {
            return Err("email.smtp_host cannot be empty when email is enabled".to_string());
        }
        if self.sender.is_empty() {
            return Err("email.sender cannot be empty when email is enabled".to_string());
        }
        if self.recipients.is_empty() {
            return Err("email.recipients cannot be empty when email is enabled".to_string());
        }
        if self.max_attachment_mb == 0 {
            return Err("email.max_attachment_mb must be at least 1".to_string());
        }
        Ok(())
    }

    /// Error recipient list, falling back to the main recipients
    pub fn error_recipients_or_default(&self) -> &[String] {
        if self.error_recipients.is_empty() {
            &self.recipients
        } else {
            &self.error_recipients
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: String::new(),
            smtp_port: default_smtp_port(),
            use_ssl: false,
            sender: String::new(),
            password: None,
            recipients: Vec::new(),
            error_recipients: Vec::new(),
            max_attachment_mb: default_max_attachment_mb(),
        }
    }
}

/// FTP distribution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FtpConfig {
    /// Whether FTP distribution is attempted at all
    #[serde(default)]
    pub enabled: bool,

    /// FTP server host
    #[serde(default)]
    pub host: String,

    /// FTP server port
    #[serde(default = "default_ftp_port")]
    pub port: u16,

    /// Login user
    #[serde(default)]
    pub username: String,

    /// Login password
    #[serde(default)]
    pub password: Option<SecretString>,

    /// Remote directory uploads land in
    #[serde(default = "default_remote_dir")]
    pub remote_dir: String,

    /// Use passive mode
    #[serde(default = "default_true")]
    pub passive: bool,

    /// Upload size cap in megabytes; no cap when unset
    #[serde(default)]
    pub max_upload_mb: Option<u64>,
}

impl FtpConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }
        if self.host.is_empty() {
            return Err("ftp.host cannot be empty when ftp is enabled".to_string());
        }
        if self.username.is_empty() {
            return Err("ftp.username cannot be empty when ftp is enabled".to_string());
        }
        Ok(())
    }
}

impl Default for FtpConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            host: String::new(),
            port: default_ftp_port(),
            username: String::new(),
            password: None,
            remote_dir: default_remote_dir(),
            passive: true,
            max_upload_mb: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable rolling file logs alongside console output
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory log files are written into
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy (daily or hourly)
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_max_connections() -> usize {
    4
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_output_dir() -> String {
    "reports".to_string()
}

fn default_file_prefix() -> String {
    "daily_report".to_string()
}

fn default_sheet_name() -> String {
    "Report".to_string()
}

fn default_decimals() -> u32 {
    2
}

fn default_smtp_port() -> u16 {
    587
}

fn default_max_attachment_mb() -> u64 {
    10
}

fn default_ftp_port() -> u16 {
    21
}

fn default_remote_dir() -> String {
    "/".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}
