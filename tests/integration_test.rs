//! Integration tests for the full splitting pipeline

use std::io::{Cursor, Read};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

use quadkit::{QuadKit, RunState};

/// Creates PNG bytes for a width x height test image
fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 64])
    });
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

#[test]
fn test_complete_split_and_package_workflow() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut kit = QuadKit::new();
    kit.add_image("even_grid.png", png_bytes(800, 600));
    kit.add_image("odd_grid.png", png_bytes(801, 601));
    kit.add_image("broken.png", vec![1, 2, 3, 4]);

    assert_eq!(kit.image_count(), 3);
    assert_eq!(kit.state(), RunState::Idle);
    assert_eq!(kit.progress(), 0);

    // One corrupt input must not abort the batch
    kit.process(None).unwrap();

    assert_eq!(kit.state(), RunState::Completed);
    assert_eq!(kit.progress(), 100);
    assert!(kit.has_results());

    let names: Vec<&str> = kit.results().iter().map(|r| r.display_name.as_str()).collect();
    assert_eq!(names, vec!["even_grid", "odd_grid"]);
    assert_eq!(kit.failures().len(), 1);
    assert_eq!(kit.failures()[0].display_name, "broken");

    // Even source splits into four equal quadrants
    let even = &kit.results()[0];
    let dimensions: Vec<(u32, u32)> = even.quadrants.iter().map(|q| (q.width, q.height)).collect();
    assert_eq!(dimensions, vec![(400, 300), (400, 300), (400, 300), (400, 300)]);

    // Odd source: right column and bottom row absorb the extra pixel
    let odd = &kit.results()[1];
    let dimensions: Vec<(u32, u32)> = odd.quadrants.iter().map(|q| (q.width, q.height)).collect();
    assert_eq!(dimensions, vec![(400, 300), (401, 300), (400, 301), (401, 301)]);

    // The archive holds one folder and four files per success
    let blob = kit.build_archive().unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(blob)).unwrap();
    assert_eq!(archive.len(), 10);

    let mut entry = archive.by_name("odd_grid/odd_grid_quad_4.png").unwrap();
    let mut data = Vec::new();
    entry.read_to_end(&mut data).unwrap();
    let decoded = image::load_from_memory(&data).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (401, 301));

    kit.clear();
    assert_eq!(kit.image_count(), 0);
    assert_eq!(kit.state(), RunState::Idle);
    assert_eq!(kit.progress(), 0);
    assert!(!kit.has_results());
}

#[test]
fn test_empty_batch_leaves_state_untouched() {
    let mut kit = QuadKit::new();

    kit.process(None).unwrap();

    assert_eq!(kit.state(), RunState::Idle);
    assert_eq!(kit.progress(), 0);
    assert!(!kit.has_results());
}
