use log::info;

use crate::archive::{ArchivePackager, ArchiveSink, ZipArchiveSink};
use crate::batch::{
    BatchFailure, BatchRunner, ProcessedResult, ProgressSink, RunState, SourceImage,
};
use crate::errors::SplitResult;

/// Main interface to the quadkit library
///
/// Owns the captured inputs and the batch runner. An embedding UI
/// talks to this facade only: it captures images, starts a run, reads
/// back state/progress/results for display, and asks for the archive
/// blob to hand to its download action.
pub struct QuadKit {
    images: Vec<SourceImage>,
    runner: BatchRunner,
    packager: ArchivePackager,
}

impl QuadKit {
    /// Create an empty, idle instance
    pub fn new() -> Self {
        QuadKit {
            images: Vec::new(),
            runner: BatchRunner::new(),
            packager: ArchivePackager::new(),
        }
    }

    /// Capture one input image for the next run
    ///
    /// # Arguments
    /// * `file_name` - Original file name; the extension is stripped
    ///   to form the display name
    /// * `bytes` - Raw encoded image bytes
    pub fn add_image(&mut self, file_name: &str, bytes: Vec<u8>) {
        let image = SourceImage::new(file_name, bytes);
        info!("Captured '{}' ({} bytes)", image.display_name(), image.byte_size());
        self.images.push(image);
    }

    /// Number of captured input images
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Current run state
    pub fn state(&self) -> RunState {
        self.runner.state()
    }

    /// Progress of the current or last run, 0-100
    pub fn progress(&self) -> u8 {
        self.runner.progress()
    }

    /// Results of the last run, in input order
    pub fn results(&self) -> &[ProcessedResult] {
        self.runner.results()
    }

    /// Failures of the last run, in input order
    pub fn failures(&self) -> &[BatchFailure] {
        self.runner.failures()
    }

    /// Whether the last run produced anything to package
    pub fn has_results(&self) -> bool {
        !self.runner.results().is_empty()
    }

    /// Split every captured image, strictly in order
    ///
    /// # Arguments
    /// * `sink` - Optional observer for progress events
    ///
    /// # Returns
    /// Ok once every input has been attempted; per-image failures are
    /// recorded, not returned
    pub fn process(&mut self, sink: Option<&dyn ProgressSink>) -> SplitResult<()> {
        self.runner.run(&self.images, sink)
    }

    /// Package the current results into a downloadable ZIP blob
    pub fn build_archive(&self) -> SplitResult<Vec<u8>> {
        let mut sink = ZipArchiveSink::new();
        self.build_archive_with(&mut sink)
    }

    /// Package the current results through a caller-supplied sink
    ///
    /// # Arguments
    /// * `sink` - Archive writer receiving folders and files
    pub fn build_archive_with(&self, sink: &mut dyn ArchiveSink) -> SplitResult<Vec<u8>> {
        self.packager.build_archive(self.runner.results(), sink)
    }

    /// Drop captured inputs and accumulated results, back to idle
    ///
    /// This is the release point for every captured per-image buffer,
    /// on success and failure paths alike.
    pub fn clear(&mut self) {
        self.images.clear();
        self.runner.clear();
        info!("Batch cleared");
    }
}

impl Default for QuadKit {
    fn default() -> Self {
        Self::new()
    }
}
