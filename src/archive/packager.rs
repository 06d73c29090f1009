//! Archive assembly over the sink capability
//!
//! One folder per result, four files per folder, named
//! `{folder}/{folder}_quad_{1..4}.png` in the fixed row-major
//! quadrant order. Assembly is entirely in memory; delivering the
//! blob (file name, save action) is the embedding UI's concern.

use log::{debug, info};

use crate::batch::ProcessedResult;
use crate::errors::SplitResult;
use crate::utils::name_utils;

use super::sink::ArchiveSink;

/// Builds the downloadable archive from a finished run's results
pub struct ArchivePackager;

impl ArchivePackager {
    /// Create a new packager instance
    pub fn new() -> Self {
        ArchivePackager
    }

    /// Assemble one archive from the given results
    ///
    /// Duplicate display names are disambiguated with deterministic
    /// numeric suffixes; the file name prefix always follows the
    /// folder name. An empty result list yields a valid empty
    /// archive.
    ///
    /// # Arguments
    /// * `results` - Results of a completed batch run, in run order
    /// * `sink` - Archive writer receiving folders and files
    ///
    /// # Returns
    /// The serialized archive as one binary blob
    pub fn build_archive(
        &self,
        results: &[ProcessedResult],
        sink: &mut dyn ArchiveSink,
    ) -> SplitResult<Vec<u8>> {
        let folders =
            name_utils::disambiguate_folders(results.iter().map(|r| r.display_name.as_str()));

        for (result, folder) in results.iter().zip(&folders) {
            sink.add_folder(folder)?;

            for quadrant_image in &result.quadrants {
                let file_name =
                    name_utils::quadrant_file_name(folder, quadrant_image.quadrant.file_number());
                sink.add_file(&format!("{}/{}", folder, file_name), &quadrant_image.data)?;
            }

            debug!("Packaged '{}' as folder '{}'", result.display_name, folder);
        }

        info!("Archive assembled: {} folders, {} files",
              results.len(), results.len() * 4);

        sink.finish()
    }
}

impl Default for ArchivePackager {
    fn default() -> Self {
        Self::new()
    }
}
