//! Resampled elevation grid.

/// Elevations on the target grid, one per grid vertex.
///
/// Stored row-major. Row 0 is the southern edge and column 0 the western
/// edge of the target region.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationGrid {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl ElevationGrid {
    /// A grid of zeros.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Wrap row-major values. Returns `None` if the length does not match.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        (data.len() == rows * cols).then_some(Self { rows, cols, data })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Elevation at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// One row of elevations, west to east.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Mutable access to one row.
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        &mut self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// All elevations, row-major.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Mutable access to all elevations.
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Lowest elevation, or `None` for an empty grid.
    pub fn min(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::min)
    }

    /// Highest elevation, or `None` for an empty grid.
    pub fn max(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let grid = ElevationGrid::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(grid.get(1, 0), 4.0);
        assert_eq!(grid.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(grid.min(), Some(1.0));
        assert_eq!(grid.max(), Some(6.0));
        assert!(ElevationGrid::from_vec(2, 2, vec![0.0; 3]).is_none());
    }
}
