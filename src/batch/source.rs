//! Captured batch inputs

use crate::utils::name_utils;

/// One image captured for a batch run
///
/// Holds the raw encoded bytes together with the display name derived
/// from the original file name (extension stripped). Immutable once
/// captured; the batch runner borrows it for the duration of a run.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Display name, the original file name minus its extension
    display_name: String,
    /// Raw encoded image bytes
    bytes: Vec<u8>,
}

impl SourceImage {
    /// Capture an image for processing
    ///
    /// # Arguments
    /// * `file_name` - Original file name; the extension is stripped
    ///   to form the display name
    /// * `bytes` - Raw encoded image bytes
    pub fn new(file_name: &str, bytes: Vec<u8>) -> Self {
        SourceImage {
            display_name: name_utils::strip_extension(file_name),
            bytes,
        }
    }

    /// Display name shown to the user and used for archive folders
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The captured image bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size of the captured bytes
    pub fn byte_size(&self) -> usize {
        self.bytes.len()
    }
}
