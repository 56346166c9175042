use image::{Rgb, RgbImage};
use sdf_field_renderer::BitmapMask;

use crate::RasterFieldError;

/// Rec. 601 luma of an 8-bit RGB pixel, scaled to `[0, 1]`.
pub fn luminance(pixel: &Rgb<u8>) -> f64 {
    let [r, g, b] = pixel.0;
    (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0
}

/// The red channel alone, scaled to `[0, 1]`.
pub fn red_channel(pixel: &Rgb<u8>) -> f64 {
    pixel.0[0] as f64 / 255.0
}

/// The green channel alone, scaled to `[0, 1]`.
pub fn green_channel(pixel: &Rgb<u8>) -> f64 {
    pixel.0[1] as f64 / 255.0
}

/// The blue channel alone, scaled to `[0, 1]`.
pub fn blue_channel(pixel: &Rgb<u8>) -> f64 {
    pixel.0[2] as f64 / 255.0
}

/// Thresholds a color image into a mask: a cell is interior wherever the
/// selected channel reads at least `threshold`.
///
/// `channel` maps a pixel to a scalar in `[0, 1]`; [`luminance`] is the
/// usual choice, but any closure works (a single-channel selector, an alpha
/// read on a converted image, and so on).
pub fn threshold_image<F>(
    image: &RgbImage,
    threshold: f64,
    channel: F,
) -> Result<BitmapMask, RasterFieldError>
where
    F: Fn(&Rgb<u8>) -> f64,
{
    let (width, height) = image.dimensions();
    let cells = image.pixels().map(|pixel| channel(pixel) >= threshold).collect();
    Ok(BitmapMask::new(cells, width as usize, height as usize)?)
}
