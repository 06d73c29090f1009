//! Batch run outcomes and state

use crate::errors::SplitError;
use crate::splitter::QuadrantSet;

/// Output of one successfully split image
#[derive(Debug, Clone)]
pub struct ProcessedResult {
    /// Identifier unique within the run that produced it
    pub id: String,
    /// Display name of the originating image
    pub display_name: String,
    /// The four encoded quadrants
    pub quadrants: QuadrantSet,
}

/// Record of one input that failed to split
#[derive(Debug)]
pub struct BatchFailure {
    /// Display name of the failed image
    pub display_name: String,
    /// What went wrong with it
    pub error: SplitError,
}

/// State of the single batch run
///
/// `Completed` means the run attempted every input, not that every
/// input succeeded; per-image failures are recorded separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No run started since creation or the last clear
    Idle,
    /// A run is iterating the inputs
    Processing,
    /// The last run attempted every input
    Completed,
}
