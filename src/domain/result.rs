//! Result type alias for Herald
//!
//! This module provides a convenient Result type alias that uses HeraldError
//! as the error type.

use super::errors::HeraldError;

/// Result type alias for Herald operations
///
/// This is a convenience type alias that uses `HeraldError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use herald::domain::result::Result;
/// use herald::domain::errors::HeraldError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(HeraldError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, HeraldError>;
