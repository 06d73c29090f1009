//! Quadrant ordering and the encoded quadrant set
//!
//! A composite image is bisected along both axes. The four resulting
//! sub-regions are addressed in row-major order: top-left, top-right,
//! bottom-left, bottom-right. That order is fixed and drives both the
//! in-memory layout of a [`QuadrantSet`] and the 1..4 file numbers
//! used inside the output archive.

use super::region::Region;

/// One of the four sub-regions of a 2x2 composite image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// Top-left, position 0
    TopLeft,
    /// Top-right, position 1
    TopRight,
    /// Bottom-left, position 2
    BottomLeft,
    /// Bottom-right, position 3
    BottomRight,
}

impl Quadrant {
    /// All four quadrants in row-major order
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Zero-based position in row-major order
    pub fn position(self) -> usize {
        match self {
            Quadrant::TopLeft => 0,
            Quadrant::TopRight => 1,
            Quadrant::BottomLeft => 2,
            Quadrant::BottomRight => 3,
        }
    }

    /// One-based number used in archive file names
    pub fn file_number(self) -> usize {
        self.position() + 1
    }

    /// Human-readable name for log output
    pub fn label(self) -> &'static str {
        match self {
            Quadrant::TopLeft => "top-left",
            Quadrant::TopRight => "top-right",
            Quadrant::BottomLeft => "bottom-left",
            Quadrant::BottomRight => "bottom-right",
        }
    }

    /// Crop region for this quadrant of a `width` x `height` image
    ///
    /// Both dimensions are floor-halved; the right column and bottom
    /// row absorb the leftover pixel of an odd dimension, so the four
    /// regions tile the source exactly with no gap or overlap.
    ///
    /// # Arguments
    /// * `width` - Source image width in pixels
    /// * `height` - Source image height in pixels
    ///
    /// # Returns
    /// The pixel region this quadrant covers
    pub fn region(self, width: u32, height: u32) -> Region {
        let half_width = width / 2;
        let half_height = height / 2;

        match self {
            Quadrant::TopLeft => Region::new(0, 0, half_width, half_height),
            Quadrant::TopRight => Region::new(half_width, 0, width - half_width, half_height),
            Quadrant::BottomLeft => Region::new(0, half_height, half_width, height - half_height),
            Quadrant::BottomRight => {
                Region::new(half_width, half_height, width - half_width, height - half_height)
            }
        }
    }
}

/// A single encoded quadrant image
#[derive(Debug, Clone)]
pub struct QuadrantImage {
    /// Which quadrant of the source this is
    pub quadrant: Quadrant,
    /// Width of the crop in pixels
    pub width: u32,
    /// Height of the crop in pixels
    pub height: u32,
    /// Self-contained PNG bytes
    pub data: Vec<u8>,
}

/// The four encoded quadrants of one source image
///
/// Always holds exactly four images, stored in row-major order.
#[derive(Debug, Clone)]
pub struct QuadrantSet {
    images: [QuadrantImage; 4],
}

impl QuadrantSet {
    /// Build a set from four quadrants already in row-major order
    pub(crate) fn new(images: [QuadrantImage; 4]) -> Self {
        QuadrantSet { images }
    }

    /// Get the image for a specific quadrant
    pub fn get(&self, quadrant: Quadrant) -> &QuadrantImage {
        &self.images[quadrant.position()]
    }

    /// Iterate the quadrants in row-major order
    pub fn iter(&self) -> std::slice::Iter<'_, QuadrantImage> {
        self.images.iter()
    }
}

impl<'a> IntoIterator for &'a QuadrantSet {
    type Item = &'a QuadrantImage;
    type IntoIter = std::slice::Iter<'a, QuadrantImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}
