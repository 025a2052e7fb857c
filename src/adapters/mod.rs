//! External integrations for Herald.
//!
//! This module contains the adapter implementations the pipeline core calls
//! through the port traits in [`traits`]:
//!
//! - [`database`] - Pooled PostgreSQL data source (existence checks, row
//!   extraction)
//! - [`excel`] - Spreadsheet artifact renderer
//! - [`ftp`] - FTP transfer client for artifact distribution
//! - [`email`] - SMTP notifier for outcome notifications
//!
//! Adapters own their third-party error types and convert them into the
//! domain error taxonomy at the boundary.

pub mod database;
pub mod email;
pub mod excel;
pub mod ftp;
pub mod traits;
pub mod validation;

pub use traits::{ArtifactRenderer, DataSource, Notifier, TransferClient};
