use image::{Rgb, RgbImage};
use sdf_field_renderer::DistanceField;

/// Width of the band flagged as "boundary" in the blue channel. Slightly
/// above `sqrt(0.5)`, the largest magnitude the edge metric assigns to a
/// cell touching the boundary.
pub const DEFAULT_BOUNDARY_BAND: f64 = 0.71;

/// Colorizes a signed field: exterior distance in red, interior distance in
/// green (both from the normalized field), and the boundary band in blue.
///
/// Casting from float saturates in Rust, so the channel math needs no
/// explicit clamping.
#[must_use]
pub fn field_to_image(field: &DistanceField, boundary_band: f64) -> RgbImage {
    let normalized = field.normalized();
    RgbImage::from_fn(field.width() as u32, field.height() as u32, |x, y| {
        let n = normalized.get(x as usize, y as usize);
        let r = (n.max(0.0) * 255.0) as u8;
        let g = ((-n).max(0.0) * 255.0) as u8;
        let b = if field.get(x as usize, y as usize).abs() < boundary_band {
            255
        } else {
            0
        };
        Rgb([r, g, b])
    })
}

#[cfg(test)]
mod tests {
    use super::{field_to_image, DEFAULT_BOUNDARY_BAND};
    use sdf_field_renderer::{BitmapMask, SdfConfig};

    #[test]
    fn test_channels_track_sign_and_boundary() {
        let mask = BitmapMask::from_fn(9, 9, |x, y| (3..6).contains(&x) && (3..6).contains(&y))
            .unwrap();
        let field = mask.render_sdf(&SdfConfig::default()).unwrap();
        let image = field_to_image(&field, DEFAULT_BOUNDARY_BAND);

        assert_eq!(image.dimensions(), (9, 9));

        // Far outside: red, no green, no boundary flag.
        let far = image.get_pixel(0, 0);
        assert!(far[0] > 0);
        assert_eq!(far[1], 0);
        assert_eq!(far[2], 0);

        // Center of the block: interior, so green with no red.
        let center = image.get_pixel(4, 4);
        assert_eq!(center[0], 0);
        assert!(center[1] > 0);
        assert_eq!(center[2], 0);

        // A cell just outside the block sits in the boundary band.
        let rim = image.get_pixel(2, 4);
        assert_eq!(rim[2], 255);
    }
}
