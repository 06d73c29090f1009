//! Tests for the splitting engine

use crate::errors::SplitError;
use crate::splitter::{Quadrant, QuadrantSplitter};

use super::test_utils::{fixture_image, png_fixture};

#[test]
fn test_split_even_composite() {
    let splitter = QuadrantSplitter::new();
    let set = splitter.split(&png_fixture(8, 6)).unwrap();

    let dimensions: Vec<(u32, u32)> = set.iter().map(|q| (q.width, q.height)).collect();
    assert_eq!(dimensions, vec![(4, 3), (4, 3), (4, 3), (4, 3)]);

    for (position, quadrant_image) in set.iter().enumerate() {
        assert_eq!(quadrant_image.quadrant.position(), position);
        assert!(!quadrant_image.data.is_empty());

        // Every quadrant is a self-contained image
        let decoded = image::load_from_memory(&quadrant_image.data).unwrap();
        assert_eq!((decoded.width(), decoded.height()),
                   (quadrant_image.width, quadrant_image.height));
    }
}

#[test]
fn test_split_odd_composite() {
    let splitter = QuadrantSplitter::new();
    let set = splitter.split(&png_fixture(9, 7)).unwrap();

    let dimensions: Vec<(u32, u32)> = set.iter().map(|q| (q.width, q.height)).collect();
    assert_eq!(dimensions, vec![(4, 3), (5, 3), (4, 4), (5, 4)]);
}

#[test]
fn test_quadrant_pixels_match_source() {
    let source = fixture_image(6, 4);
    let splitter = QuadrantSplitter::new();
    let set = splitter.split(&png_fixture(6, 4)).unwrap();

    for quadrant in Quadrant::ALL {
        let region = quadrant.region(6, 4);
        let decoded = image::load_from_memory(&set.get(quadrant).data)
            .unwrap()
            .to_rgb8();

        for y in 0..region.height {
            for x in 0..region.width {
                assert_eq!(decoded.get_pixel(x, y),
                           source.get_pixel(region.x + x, region.y + y),
                           "pixel mismatch in {} quadrant at ({}, {})",
                           quadrant.label(), x, y);
            }
        }
    }
}

#[test]
fn test_split_is_deterministic() {
    let bytes = png_fixture(11, 9);
    let splitter = QuadrantSplitter::new();

    let first = splitter.split(&bytes).unwrap();
    let second = splitter.split(&bytes).unwrap();

    for quadrant in Quadrant::ALL {
        assert_eq!(first.get(quadrant).data, second.get(quadrant).data);
    }
}

#[test]
fn test_corrupt_bytes_rejected() {
    let splitter = QuadrantSplitter::new();
    let error = splitter.split(b"definitely not an image").unwrap_err();

    assert!(matches!(error, SplitError::DecodeFailed(_)));
}

#[test]
fn test_truncated_image_rejected() {
    let bytes = png_fixture(20, 20);
    let splitter = QuadrantSplitter::new();
    let error = splitter.split(&bytes[..bytes.len() / 2]).unwrap_err();

    assert!(matches!(error, SplitError::DecodeFailed(_)));
}

#[test]
fn test_degenerate_dimensions_rejected() {
    let splitter = QuadrantSplitter::new();

    let error = splitter.split(&png_fixture(1, 10)).unwrap_err();
    assert!(matches!(error, SplitError::DegenerateDimensions(1, 10)));

    let error = splitter.split(&png_fixture(10, 1)).unwrap_err();
    assert!(matches!(error, SplitError::DegenerateDimensions(10, 1)));
}
