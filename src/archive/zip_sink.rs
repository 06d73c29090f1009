//! ZIP-backed archive sink

use std::io::{Cursor, Write};

use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

use crate::errors::{SplitError, SplitResult};

use super::sink::ArchiveSink;

/// Production sink writing a ZIP archive to an in-memory buffer
pub struct ZipArchiveSink {
    /// Taken by `finish`, so a finished sink rejects further calls
    writer: Option<ZipWriter<Cursor<Vec<u8>>>>,
}

impl ZipArchiveSink {
    /// Create a sink with an empty in-memory archive
    pub fn new() -> Self {
        ZipArchiveSink {
            writer: Some(ZipWriter::new(Cursor::new(Vec::new()))),
        }
    }

    /// Entry options for all members
    ///
    /// Quadrant PNGs are already deflate-compressed, so members are
    /// stored without recompression.
    fn options() -> SimpleFileOptions {
        SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
    }

    fn writer(&mut self) -> SplitResult<&mut ZipWriter<Cursor<Vec<u8>>>> {
        self.writer
            .as_mut()
            .ok_or_else(|| SplitError::ArchiveError("archive already finished".to_string()))
    }
}

impl ArchiveSink for ZipArchiveSink {
    fn add_folder(&mut self, name: &str) -> SplitResult<()> {
        self.writer()?.add_directory(name, Self::options())?;
        Ok(())
    }

    fn add_file(&mut self, path: &str, data: &[u8]) -> SplitResult<()> {
        let writer = self.writer()?;
        writer.start_file(path, Self::options())?;
        writer.write_all(data)?;
        Ok(())
    }

    fn finish(&mut self) -> SplitResult<Vec<u8>> {
        let writer = self
            .writer
            .take()
            .ok_or_else(|| SplitError::ArchiveError("archive already finished".to_string()))?;
        Ok(writer.finish()?.into_inner())
    }
}

impl Default for ZipArchiveSink {
    fn default() -> Self {
        Self::new()
    }
}
