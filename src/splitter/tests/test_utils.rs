use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

/// Creates a test image with a position-dependent pixel pattern
///
/// Every coordinate gets a distinct color, so geometry mistakes in
/// the crops show up as pixel mismatches.
pub fn fixture_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    })
}

/// Creates the PNG bytes of the fixture image
pub fn png_fixture(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(fixture_image(width, height))
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}
