//! Single-date run outcomes
//!
//! The pipeline distinguishes its terminal states explicitly instead of
//! sniffing error strings: [`RunOutcome`] is the tagged internal view, and
//! [`ProcessResult`] is the flattened record handed back to callers.

use std::path::{Path, PathBuf};

/// Error text for the "existence check found nothing" terminal state
pub const NO_DATA_ERROR: &str = "No data available";

/// Error text for the "existence check passed but extraction was empty"
/// terminal state
pub const EMPTY_EXTRACT_ERROR: &str = "No records generated";

/// Tagged terminal state of one pipeline run
///
/// `NoData` and `EmptyExtract` are deliberately separate: the existence
/// check and the extraction query are independently configured and may
/// diverge, so each can terminate a run on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Existence check found no rows for the date
    NoData,

    /// Dry-run rehearsal stopped before extraction
    Rehearsal,

    /// Extraction returned zero rows despite a positive existence check
    EmptyExtract,

    /// Report generated
    Completed {
        /// Rows rendered into the artifact
        records: usize,
        /// Where the artifact was written
        artifact: PathBuf,
    },
}

/// Result of one single-date pipeline run
///
/// Immutable once constructed. Either `success` is true with an artifact
/// (or a rehearsal), or `success` is false with an `error`;
/// `records_processed` is zero for every non-completed state.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessResult {
    /// Whether the run completed
    pub success: bool,

    /// Rows rendered into the artifact
    pub records_processed: usize,

    /// Path of the generated artifact, if one was produced
    pub file_generated: Option<PathBuf>,

    /// Failure description, if the run did not complete
    pub error: Option<String>,
}

impl ProcessResult {
    /// Completed run with a generated artifact
    pub fn completed(records: usize, artifact: impl Into<PathBuf>) -> Self {
        Self {
            success: true,
            records_processed: records,
            file_generated: Some(artifact.into()),
            error: None,
        }
    }

    /// Dry-run rehearsal: nothing extracted, nothing produced, not a failure
    pub fn rehearsal() -> Self {
        Self {
            success: true,
            records_processed: 0,
            file_generated: None,
            error: None,
        }
    }

    /// Terminal no-data state
    pub fn no_data() -> Self {
        Self::failed(NO_DATA_ERROR)
    }

    /// Terminal empty-extraction state
    pub fn empty_extract() -> Self {
        Self::failed(EMPTY_EXTRACT_ERROR)
    }

    /// Failed run with a cause description
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            records_processed: 0,
            file_generated: None,
            error: Some(error.into()),
        }
    }

    /// Artifact path, if the run produced one
    pub fn artifact(&self) -> Option<&Path> {
        self.file_generated.as_deref()
    }
}

impl From<RunOutcome> for ProcessResult {
    fn from(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::NoData => ProcessResult::no_data(),
            RunOutcome::Rehearsal => ProcessResult::rehearsal(),
            RunOutcome::EmptyExtract => ProcessResult::empty_extract(),
            RunOutcome::Completed { records, artifact } => {
                ProcessResult::completed(records, artifact)
            }
        }
    }
}
