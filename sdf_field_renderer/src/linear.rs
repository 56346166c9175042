use rayon::prelude::*;

use crate::field::try_filled_vec;
use crate::{BitmapMask, DistanceField, SdfConfig, SdfFieldError};

/// Per-row scratch for the envelope scan: the column dominating each
/// segment, and the x position where that segment begins.
struct EnvelopeScratch {
    closest_x: Vec<usize>,
    endpts: Vec<usize>,
}

impl EnvelopeScratch {
    fn new(width: usize) -> EnvelopeScratch {
        EnvelopeScratch {
            closest_x: vec![0; width],
            endpts: vec![0; width],
        }
    }
}

/// Computes the unsigned field with the separable two-pass transform.
///
/// Pass 1 sweeps every column up and down, counting steps to the nearest
/// source cell in that column. Pass 2 sweeps every row twice, building the
/// lower envelope of the parabolas `(x - i)^2 + steps[i]^2` and reading the
/// winning feature back out with the half-cell edge correction applied.
/// Both passes are linear and parallel over independent columns/rows.
pub(crate) fn compute_udf(
    mask: &BitmapMask,
    invert: bool,
    config: &SdfConfig,
) -> Result<DistanceField, SdfFieldError> {
    let source = !invert;
    let width = mask.width();
    let height = mask.height();
    let mut field = DistanceField::zeroed(width, height)?;

    // With no source cells the transform is vacuous; the field stays zero
    // so the signed composition cancels.
    if !mask.cells().contains(&source) {
        return Ok(field);
    }

    let sentinel = (width + height + 2) as i64;

    // Column-major so that each column is one contiguous chunk.
    let mut steps = try_filled_vec(0i64, width * height)?;
    if config.parallel {
        steps
            .par_chunks_mut(height)
            .enumerate()
            .try_for_each(|(x, column)| -> Result<(), SdfFieldError> {
                config.check_cancelled()?;
                column_scan(mask, source, sentinel, x, column);
                Ok(())
            })?;
    } else {
        for (x, column) in steps.chunks_mut(height).enumerate() {
            config.check_cancelled()?;
            column_scan(mask, source, sentinel, x, column);
        }
    }

    if config.parallel {
        field
            .as_mut_slice()
            .par_chunks_mut(width)
            .enumerate()
            .try_for_each_init(
                || EnvelopeScratch::new(width),
                |scratch, (y, row)| -> Result<(), SdfFieldError> {
                    config.check_cancelled()?;
                    envelope_scan(&steps, height, y, scratch, row);
                    Ok(())
                },
            )?;
    } else {
        let mut scratch = EnvelopeScratch::new(width);
        for (y, row) in field.as_mut_slice().chunks_mut(width).enumerate() {
            config.check_cancelled()?;
            envelope_scan(&steps, height, y, &mut scratch, row);
        }
    }

    Ok(field)
}

/// Steps along one column to the nearest source cell, or `sentinel` when the
/// column has none.
fn column_scan(mask: &BitmapMask, source: bool, sentinel: i64, x: usize, column: &mut [i64]) {
    let height = column.len();
    column[0] = if mask.get(x, 0) == source { 0 } else { sentinel };
    for y in 1..height {
        column[y] = if mask.get(x, y) == source {
            0
        } else {
            1 + column[y - 1]
        };
    }
    for y in (0..height - 1).rev() {
        if column[y + 1] < column[y] {
            column[y] = 1 + column[y + 1];
        }
    }
}

/// Squared center distance from `(x, y)` to the feature recorded for column `i`.
fn pix_dist(steps: &[i64], height: usize, y: usize, x: usize, i: usize) -> i64 {
    let dx = x as i64 - i as i64;
    let g = steps[i * height + y];
    dx * dx + g * g
}

/// First x at which the parabola of column `j` beats the parabola of column
/// `i < j`, by the integer intersection floor.
fn sep(steps: &[i64], height: usize, y: usize, i: usize, j: usize) -> i64 {
    let gi = steps[i * height + y];
    let gj = steps[j * height + y];
    let (i, j) = (i as i64, j as i64);
    (j * j - i * i + gj * gj - gi * gi) / (2 * (j - i))
}

fn envelope_scan(
    steps: &[i64],
    height: usize,
    y: usize,
    scratch: &mut EnvelopeScratch,
    row: &mut [f64],
) {
    let width = row.len();
    let closest_x = &mut scratch.closest_x;
    let endpts = &mut scratch.endpts;

    let mut seg: isize = 0;
    closest_x[0] = 0;
    endpts[0] = 0;
    for x in 1..width {
        while seg >= 0
            && pix_dist(steps, height, y, endpts[seg as usize], closest_x[seg as usize])
                > pix_dist(steps, height, y, endpts[seg as usize], x)
        {
            seg -= 1;
        }
        if seg < 0 {
            seg = 0;
            closest_x[0] = x;
        } else {
            let start = 1 + sep(steps, height, y, closest_x[seg as usize], x);
            if start < width as i64 {
                seg += 1;
                closest_x[seg as usize] = x;
                endpts[seg as usize] = start as usize;
            }
        }
    }

    for x in (0..width).rev() {
        let nearest = closest_x[seg as usize];
        let g = steps[nearest * height + y];
        let diffx = if x == nearest {
            0.0
        } else {
            (x as f64 - nearest as f64).abs() - 0.5
        };
        let diffy = if g == 0 { 0.0 } else { g as f64 - 0.5 };
        row[x] = (diffx * diffx + diffy * diffy).sqrt();
        if x == endpts[seg as usize] && seg > 0 {
            seg -= 1;
        }
    }
}
