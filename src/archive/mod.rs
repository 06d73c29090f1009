//! Archive packaging
//!
//! Builds the downloadable archive from a finished run's results. The
//! packager talks to a narrow sink interface so the real ZIP writer
//! can be swapped for a fake in tests.

mod sink;
mod zip_sink;
mod packager;


// Public exports
pub use sink::ArchiveSink;
pub use zip_sink::ZipArchiveSink;
pub use packager::ArchivePackager;
