pub mod errors;
pub mod splitter;
pub mod batch;
pub mod archive;
pub mod utils;
pub mod api;

pub use crate::api::QuadKit;

pub use errors::{SplitError, SplitResult};
pub use splitter::{Quadrant, QuadrantImage, QuadrantSet, QuadrantSplitter, Region};
pub use batch::{
    BatchFailure, BatchRunner, ProcessedResult, ProgressEvent, ProgressSink, RunState, SourceImage,
};
pub use archive::{ArchivePackager, ArchiveSink, ZipArchiveSink};
