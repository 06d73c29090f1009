//! Quadrant splitting engine
//!
//! Decodes one composite image and produces four encoded quadrant
//! crops. The engine holds no state between calls and never touches
//! the filesystem; input and output are in-memory byte buffers.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};
use log::debug;

use crate::errors::{SplitError, SplitResult};

use super::quadrant::{Quadrant, QuadrantImage, QuadrantSet};

/// Splits 2x2 composite images into four encoded quadrants
pub struct QuadrantSplitter;

impl QuadrantSplitter {
    /// Create a new splitter instance
    pub fn new() -> Self {
        QuadrantSplitter
    }

    /// Split one composite image into its four quadrants
    ///
    /// Decodes the source bytes, crops the four regions defined by
    /// [`Quadrant::region`], and re-encodes each crop as PNG so every
    /// quadrant is a self-contained lossless image. Splitting the
    /// same bytes twice yields byte-identical output.
    ///
    /// # Arguments
    /// * `bytes` - Encoded source image bytes
    ///
    /// # Returns
    /// The four quadrants in row-major order, or an error attributable
    /// to this one source image
    pub fn split(&self, bytes: &[u8]) -> SplitResult<QuadrantSet> {
        let source = image::load_from_memory(bytes)
            .map_err(|e| SplitError::DecodeFailed(e.to_string()))?;

        let width = source.width();
        let height = source.height();

        // A dimension below 2 would leave a zero-area quadrant
        if width < 2 || height < 2 {
            return Err(SplitError::DegenerateDimensions(width, height));
        }

        debug!("Splitting {}x{} composite into quadrants", width, height);

        let images = [
            self.encode_quadrant(&source, Quadrant::TopLeft, width, height)?,
            self.encode_quadrant(&source, Quadrant::TopRight, width, height)?,
            self.encode_quadrant(&source, Quadrant::BottomLeft, width, height)?,
            self.encode_quadrant(&source, Quadrant::BottomRight, width, height)?,
        ];

        // The decoded source pixels drop here; only the encoded
        // quadrant bytes outlive the call
        Ok(QuadrantSet::new(images))
    }

    /// Crop one quadrant out of the decoded source and encode it
    ///
    /// # Arguments
    /// * `source` - The decoded composite image
    /// * `quadrant` - Which quadrant to produce
    /// * `width` - Source width in pixels
    /// * `height` - Source height in pixels
    ///
    /// # Returns
    /// The encoded quadrant or an encode error
    fn encode_quadrant(
        &self,
        source: &DynamicImage,
        quadrant: Quadrant,
        width: u32,
        height: u32,
    ) -> SplitResult<QuadrantImage> {
        let region = quadrant.region(width, height);
        let crop = source.crop_imm(region.x, region.y, region.width, region.height);

        let mut data = Vec::new();
        crop.write_to(&mut Cursor::new(&mut data), ImageFormat::Png)
            .map_err(|e| SplitError::EncodeFailed(e.to_string()))?;

        debug!("Encoded {} quadrant: {}x{} ({} bytes)",
               quadrant.label(), region.width, region.height, data.len());

        Ok(QuadrantImage {
            quadrant,
            width: region.width,
            height: region.height,
            data,
        })
    }
}

impl Default for QuadrantSplitter {
    fn default() -> Self {
        Self::new()
    }
}
