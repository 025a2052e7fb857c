//! Date-range replay
//!
//! This module provides the replay engine that re-runs the single-date
//! pipeline across a span of calendar days, and the aggregate summary it
//! reports.

pub mod engine;
pub mod summary;

pub use engine::{ReplayEngine, CONFIG_FILE_NAME};
pub use summary::ReplaySummary;
