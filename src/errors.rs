//! Custom error types for the splitting and packaging pipeline

use std::fmt;
use std::io;

/// Pipeline-specific error types
#[derive(Debug)]
pub enum SplitError {
    /// I/O error
    IoError(io::Error),
    /// Source bytes could not be decoded as an image
    DecodeFailed(String),
    /// Source image too small to yield four quadrants
    DegenerateDimensions(u32, u32),
    /// Re-encoding a quadrant failed
    EncodeFailed(String),
    /// Archive assembly failed
    ArchiveError(String),
    /// A batch run was started while one was already in progress
    BatchAlreadyRunning,
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::IoError(e) => write!(f, "I/O error: {}", e),
            SplitError::DecodeFailed(msg) => write!(f, "Failed to decode image: {}", msg),
            SplitError::DegenerateDimensions(w, h) => {
                write!(f, "Image too small to split: {}x{}", w, h)
            }
            SplitError::EncodeFailed(msg) => write!(f, "Failed to encode quadrant: {}", msg),
            SplitError::ArchiveError(msg) => write!(f, "Archive error: {}", msg),
            SplitError::BatchAlreadyRunning => write!(f, "A batch run is already in progress"),
            SplitError::GenericError(msg) => write!(f, "Split error: {}", msg),
        }
    }
}

impl std::error::Error for SplitError {}

impl From<io::Error> for SplitError {
    fn from(error: io::Error) -> Self {
        SplitError::IoError(error)
    }
}

impl From<String> for SplitError {
    fn from(msg: String) -> Self {
        SplitError::GenericError(msg)
    }
}

impl From<zip::result::ZipError> for SplitError {
    fn from(error: zip::result::ZipError) -> Self {
        SplitError::ArchiveError(error.to_string())
    }
}

/// Result type for pipeline operations
pub type SplitResult<T> = Result<T, SplitError>;
