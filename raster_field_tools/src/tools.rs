use std::path::{Path, PathBuf};

use futures::future::try_join_all;
use tokio::task::spawn_blocking;

use sdf_field_renderer::{BitmapMask, DistanceField, SdfConfig};

use crate::threshold::{luminance, threshold_image};
use crate::visualize::field_to_image;
use crate::RasterFieldError;

/// Loads an image from disk and thresholds its luminance into a mask.
///
/// Note: decoding is CPU-bound, so the whole load runs on the blocking
/// pool rather than mixing async reads with a blocking decode.
pub async fn load_mask<P: AsRef<Path>>(
    path: P,
    threshold: f64,
) -> Result<BitmapMask, RasterFieldError> {
    let path = path.as_ref().to_owned();
    spawn_blocking(move || {
        let image = image::open(path)?.to_rgb8();
        threshold_image(&image, threshold, luminance)
    })
    .await?
}

/// Loads an image, thresholds it, and renders the signed field with the
/// configured engine.
pub async fn render_sdf_from_file<P: AsRef<Path>>(
    path: P,
    threshold: f64,
    config: &SdfConfig,
) -> Result<DistanceField, RasterFieldError> {
    let mask = load_mask(path, threshold).await?;
    let config = config.clone();
    Ok(spawn_blocking(move || mask.render_sdf(&config)).await??)
}

/// Runs the whole pipeline for one file: decode, threshold, render, and
/// write the colorized field as an image next to `output`'s format.
pub async fn render_sdf_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    threshold: f64,
    config: &SdfConfig,
    boundary_band: f64,
) -> Result<(), RasterFieldError> {
    let field = render_sdf_from_file(input, threshold, config).await?;
    let output = output.as_ref().to_owned();
    spawn_blocking(move || field_to_image(&field, boundary_band).save(output)).await??;
    Ok(())
}

/// Fans a batch of `(input, output)` jobs out concurrently, failing fast on
/// the first error.
pub async fn render_sdf_files(
    jobs: &[(PathBuf, PathBuf)],
    threshold: f64,
    config: &SdfConfig,
    boundary_band: f64,
) -> Result<(), RasterFieldError> {
    try_join_all(jobs.iter().map(|(input, output)| {
        render_sdf_file(input, output, threshold, config, boundary_band)
    }))
    .await?;
    Ok(())
}
