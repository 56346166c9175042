use crate::{DistanceField, SdfConfig, SdfFieldError};

/// A rectangular grid of boolean cells, the input to every engine.
///
/// `true` cells are interior, `false` cells are exterior. Cells are stored
/// row-major and addressed as `(x, y)` with `x` running along a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitmapMask {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl BitmapMask {
    /// Creates a mask from prepared cell data.
    ///
    /// The data is expected to be row-major and to match the dimensions
    /// exactly; both sides must be at least one cell.
    pub fn new(cells: Vec<bool>, width: usize, height: usize) -> Result<BitmapMask, SdfFieldError> {
        let expected = width
            .checked_mul(height)
            .filter(|_| width > 0 && height > 0)
            .ok_or(SdfFieldError::InvalidDimensions(width, height))?;
        if cells.len() != expected {
            return Err(SdfFieldError::InvalidDataLength(
                "width * height",
                expected,
                cells.len(),
            ));
        }

        Ok(BitmapMask {
            cells,
            width,
            height,
        })
    }

    /// Creates a mask by evaluating `cell` at every `(x, y)`.
    pub fn from_fn<F>(width: usize, height: usize, mut cell: F) -> Result<BitmapMask, SdfFieldError>
    where
        F: FnMut(usize, usize) -> bool,
    {
        if width == 0 || height == 0 {
            return Err(SdfFieldError::InvalidDimensions(width, height));
        }
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(cell(x, y));
            }
        }
        BitmapMask::new(cells, width, height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell at `(x, y)` is interior.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    /// The raw row-major cell data.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// A mask of the same shape with every cell flipped.
    #[must_use]
    pub fn inverted(&self) -> BitmapMask {
        BitmapMask {
            cells: self.cells.iter().map(|&cell| !cell).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Renders the signed distance field for this mask.
    ///
    /// Dispatches to the engine selected by `config`; see [`crate::render_sdf`].
    pub fn render_sdf(&self, config: &SdfConfig) -> Result<DistanceField, SdfFieldError> {
        crate::render::render_sdf(self, config)
    }
}

#[cfg(test)]
mod tests {
    use super::BitmapMask;
    use crate::SdfFieldError;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(
            BitmapMask::new(Vec::new(), 0, 4),
            Err(SdfFieldError::InvalidDimensions(0, 4))
        ));
        assert!(matches!(
            BitmapMask::new(Vec::new(), 4, 0),
            Err(SdfFieldError::InvalidDimensions(4, 0))
        ));
    }

    #[test]
    fn test_rejects_mismatched_data_length() {
        assert!(matches!(
            BitmapMask::new(vec![false; 7], 2, 3),
            Err(SdfFieldError::InvalidDataLength("width * height", 6, 7))
        ));
    }

    #[test]
    fn test_row_major_addressing() {
        let mask = BitmapMask::new(vec![false, true, false, false, false, true], 3, 2).unwrap();
        assert!(mask.get(1, 0));
        assert!(mask.get(2, 1));
        assert!(!mask.get(0, 1));
    }

    #[test]
    fn test_inverted_flips_every_cell() {
        let mask = BitmapMask::from_fn(4, 3, |x, y| (x + y) % 2 == 0).unwrap();
        let inverted = mask.inverted();
        for y in 0..3 {
            for x in 0..4 {
                assert_ne!(mask.get(x, y), inverted.get(x, y));
            }
        }
    }
}
