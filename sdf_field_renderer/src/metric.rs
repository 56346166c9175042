/// Distance from the center of cell `(x, y)` to the nearest point of the
/// boundary edge between it and the opposite-colored cell `(x1, y1)`.
///
/// The boundary runs along the midpoints of the faces separating opposite
/// cells, half a cell away from either center, which is where the `0.5`
/// corrections come from. For axis-aligned pairs the nearest boundary point
/// lies straight ahead; otherwise it sits at the corner of the face
/// rectangle nearest to `(x, y)`.
#[must_use]
pub fn edge_distance(x: usize, y: usize, x1: usize, y1: usize) -> f64 {
    let dx = x.abs_diff(x1) as f64;
    let dy = y.abs_diff(y1) as f64;
    if x == x1 || y == y1 {
        dx + dy - 0.5
    } else {
        ((dx - 0.5) * (dx - 0.5) + (dy - 0.5) * (dy - 0.5)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::edge_distance;

    #[test]
    fn test_orthogonal_neighbors() {
        assert_eq!(edge_distance(3, 3, 4, 3), 0.5);
        assert_eq!(edge_distance(3, 3, 3, 2), 0.5);
    }

    #[test]
    fn test_axis_aligned_runs() {
        assert_eq!(edge_distance(0, 5, 0, 1), 3.5);
        assert_eq!(edge_distance(2, 0, 7, 0), 4.5);
    }

    #[test]
    fn test_diagonal_neighbors() {
        let expected = 0.5_f64.sqrt();
        assert!((edge_distance(1, 1, 0, 0) - expected).abs() < 1e-12);
        assert!((edge_distance(1, 1, 2, 2) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_general_offsets() {
        // (4, 3) apart: the nearest corner of the separating face is at
        // (3.5, 2.5) from the query center.
        let expected = (3.5_f64 * 3.5 + 2.5 * 2.5).sqrt();
        assert!((edge_distance(0, 0, 4, 3) - expected).abs() < 1e-12);
        assert!((edge_distance(4, 3, 0, 0) - expected).abs() < 1e-12);
    }
}
