use std::fs;
use std::path::PathBuf;

use image::{Rgb, RgbImage};
use raster_field_tools::{load_mask, render_sdf_file, DEFAULT_BOUNDARY_BAND};
use sdf_field_renderer::SdfConfig;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "raster_field_tools_{}_{}",
        name,
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("Unable to create scratch directory");
    dir
}

fn write_disk_image(path: &PathBuf, side: u32, radius: f64) {
    let center = side as f64 / 2.0;
    let image = RgbImage::from_fn(side, side, |x, y| {
        let dx = x as f64 - center;
        let dy = y as f64 - center;
        if dx * dx + dy * dy <= radius * radius {
            Rgb([255, 255, 255])
        } else {
            Rgb([0, 0, 0])
        }
    });
    image.save(path).expect("Unable to write fixture image");
}

#[tokio::test]
async fn test_load_mask() {
    let dir = scratch_dir("load_mask");
    let input = dir.join("disk.png");
    write_disk_image(&input, 32, 10.0);

    let mask = load_mask(&input, 0.5).await.expect("Unable to load mask");
    assert_eq!(mask.width(), 32);
    assert_eq!(mask.height(), 32);
    assert!(mask.get(16, 16));
    assert!(!mask.get(0, 0));
    assert!(!mask.get(31, 31));
}

#[tokio::test]
async fn test_render_sdf_file() {
    let dir = scratch_dir("render_sdf_file");
    let input = dir.join("disk.png");
    let output = dir.join("disk_sdf.png");
    write_disk_image(&input, 48, 12.0);

    render_sdf_file(&input, &output, 0.5, &SdfConfig::default(), DEFAULT_BOUNDARY_BAND)
        .await
        .expect("Unable to render field");

    let rendered = image::open(&output)
        .expect("Unable to read rendered field")
        .to_rgb8();
    assert_eq!(rendered.dimensions(), (48, 48));

    // Exterior corner reads red, interior center reads green.
    let corner = rendered.get_pixel(0, 0);
    assert!(corner[0] > 0 && corner[1] == 0);
    let center = rendered.get_pixel(24, 24);
    assert!(center[1] > 0 && center[0] == 0);
}

#[tokio::test]
async fn test_load_mask_missing_file() {
    let dir = scratch_dir("missing");
    let result = load_mask(dir.join("not_there.png"), 0.5).await;
    assert!(result.is_err());
}
