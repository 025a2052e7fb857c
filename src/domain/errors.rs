//! Domain error types
//!
//! This module defines the error hierarchy for Herald. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Herald error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum HeraldError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Data source errors
    #[error("Data source error: {0}")]
    DataSource(#[from] DataSourceError),

    /// Spreadsheet rendering errors
    #[error("Render error: {0}")]
    Render(String),

    /// File transfer errors
    #[error("Transfer error: {0}")]
    Transfer(#[from] TransferError),

    /// Notification delivery errors
    #[error("Notification error: {0}")]
    Notification(String),

    /// Validation errors (missing file, size cap exceeded)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Orchestration-level pipeline errors
    #[error("Pipeline error: {0}")]
    Pipeline(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Data-source-specific errors
///
/// Errors that occur when talking to the relational store. These errors
/// don't expose the underlying database driver types.
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// Failed to connect or to obtain a pooled connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A fetched row could not be decoded into report cells
    #[error("Failed to decode row: {0}")]
    RowDecode(String),

    /// Invalid connection configuration
    #[error("Invalid database configuration: {0}")]
    InvalidConfiguration(String),
}

/// Transfer-specific errors
///
/// Errors that occur during FTP distribution of an artifact.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Failed to connect or authenticate against the remote endpoint
    #[error("FTP connection failed: {0}")]
    ConnectionFailed(String),

    /// Upload of the local file failed
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    /// No live connection when an upload was attempted
    #[error("Not connected to FTP server")]
    NotConnected,
}

// Conversion from std::io::Error
impl From<std::io::Error> for HeraldError {
    fn from(err: std::io::Error) -> Self {
        HeraldError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for HeraldError {
    fn from(err: toml::de::Error) -> Self {
        HeraldError::Configuration(format!("TOML parse error: {err}"))
    }
}
