//! Archive writer capability trait

use crate::errors::SplitResult;

/// Narrow interface to the archive-writer library
///
/// The packager depends only on this trait: create folders, add files,
/// serialize to one blob. Implementations own whatever writer state
/// they need.
pub trait ArchiveSink {
    /// Create a folder entry
    ///
    /// # Arguments
    /// * `name` - Folder name, without a trailing separator
    fn add_folder(&mut self, name: &str) -> SplitResult<()>;

    /// Add a file with the given archive path and contents
    ///
    /// # Arguments
    /// * `path` - Full path inside the archive, e.g. `folder/file.png`
    /// * `data` - File contents
    fn add_file(&mut self, path: &str, data: &[u8]) -> SplitResult<()>;

    /// Serialize everything added so far into one binary blob
    ///
    /// Consumes the underlying writer; finishing a sink twice is an
    /// error.
    fn finish(&mut self) -> SplitResult<Vec<u8>>;
}
