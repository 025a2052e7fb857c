//! Shared file validation for outbound channels
//!
//! FTP uploads and email attachments follow the same size-cap contract;
//! both adapters validate through this helper.

use crate::domain::errors::HeraldError;
use crate::domain::result::Result;
use std::path::Path;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Validates that a file exists and fits under an optional size cap
///
/// # Errors
///
/// Returns [`HeraldError::Validation`] when the file is missing or its size
/// exceeds `max_size_mb`.
pub fn validate_file_size(path: &Path, max_size_mb: Option<u64>) -> Result<bool> {
    let metadata = std::fs::metadata(path)
        .map_err(|_| HeraldError::Validation(format!("File not found: {}", path.display())))?;

    if let Some(cap) = max_size_mb {
        let size_mb = metadata.len() as f64 / BYTES_PER_MB;
        if size_mb > cap as f64 {
            return Err(HeraldError::Validation(format!(
                "File size ({size_mb:.2}MB) exceeds limit ({cap}MB)"
            )));
        }
    }

    Ok(true)
}
