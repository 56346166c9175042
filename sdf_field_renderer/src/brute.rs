use rayon::prelude::*;

use crate::metric::edge_distance;
use crate::{BitmapMask, DistanceField, SdfConfig, SdfFieldError};

/// Computes the signed field by exhaustively scanning, for every cell, all
/// cells of the opposite color. Quadratic in the cell count; rows are
/// independent and dispatch across the worker pool.
pub(crate) fn compute_sdf(
    mask: &BitmapMask,
    config: &SdfConfig,
) -> Result<DistanceField, SdfFieldError> {
    let width = mask.width();
    let mut field = DistanceField::zeroed(width, mask.height())?;

    if config.parallel {
        field
            .as_mut_slice()
            .par_chunks_mut(width)
            .enumerate()
            .try_for_each(|(y, row)| -> Result<(), SdfFieldError> {
                config.check_cancelled()?;
                scan_row(mask, y, row);
                Ok(())
            })?;
    } else {
        for (y, row) in field.as_mut_slice().chunks_mut(width).enumerate() {
            config.check_cancelled()?;
            scan_row(mask, y, row);
        }
    }

    Ok(field)
}

fn scan_row(mask: &BitmapMask, y: usize, row: &mut [f64]) {
    for (x, out) in row.iter_mut().enumerate() {
        let interior = mask.get(x, y);
        let mut nearest = f64::INFINITY;
        for y1 in 0..mask.height() {
            for x1 in 0..mask.width() {
                if mask.get(x1, y1) != interior {
                    let distance = edge_distance(x, y, x1, y1);
                    if distance < nearest {
                        nearest = distance;
                    }
                }
            }
        }
        // A uniform mask has no opposite cells at all; the field stays zero.
        *out = if nearest.is_finite() {
            if interior {
                -nearest
            } else {
                nearest
            }
        } else {
            0.0
        };
    }
}
