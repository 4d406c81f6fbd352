//! In-memory raster.

use crate::source::check_request;
use crate::{GeoExtent, RasterError, RasterSource, Result};

/// A single-band raster held in memory.
///
/// Samples are stored in row-major order (north to south, west to east for a
/// north-up raster), exactly as they would be decoded from a GeoTIFF.
#[derive(Debug, Clone)]
pub struct MemoryRaster {
    extent: GeoExtent,
    data: Vec<f64>,
}

impl MemoryRaster {
    /// Create a raster from row-major samples.
    pub fn new(extent: GeoExtent, data: Vec<f64>) -> Result<Self> {
        let expected = extent.rows * extent.cols;
        if data.len() != expected {
            return Err(RasterError::DimensionMismatch {
                cols: extent.cols,
                rows: extent.rows,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { extent, data })
    }

    /// Create a raster where every sample is `value`.
    pub fn constant(extent: GeoExtent, value: f64) -> Self {
        Self {
            data: vec![value; extent.rows * extent.cols],
            extent,
        }
    }

    /// Create a raster by evaluating `f(row, col)` for every pixel.
    pub fn from_fn(extent: GeoExtent, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(extent.rows * extent.cols);
        for row in 0..extent.rows {
            for col in 0..extent.cols {
                data.push(f(row, col));
            }
        }
        Self { extent, data }
    }

    /// Raw samples in row-major order.
    pub fn data(&self) -> &[f64] {
        &self.data
    }
}

impl RasterSource for MemoryRaster {
    fn extent(&self) -> GeoExtent {
        self.extent
    }

    fn read_row(&self, band: usize, row: usize) -> Result<Vec<f64>> {
        check_request(band, row, self.extent.rows)?;
        let start = row * self.extent.cols;
        Ok(self.data[start..start + self.extent.cols].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent(rows: usize, cols: usize) -> GeoExtent {
        GeoExtent {
            x_origin: 0.0,
            y_origin: rows as f64,
            pixel_width: 1.0,
            pixel_height: -1.0,
            rows,
            cols,
        }
    }

    #[test]
    fn test_read_row() {
        let raster = MemoryRaster::from_fn(extent(3, 4), |r, c| (r * 10 + c) as f64);
        assert_eq!(raster.read_row(1, 2).unwrap(), vec![20.0, 21.0, 22.0, 23.0]);
    }

    #[test]
    fn test_rejects_bad_requests() {
        let raster = MemoryRaster::constant(extent(3, 4), 1.0);
        assert!(matches!(
            raster.read_row(2, 0),
            Err(RasterError::BandOutOfRange { band: 2, bands: 1 })
        ));
        assert!(matches!(
            raster.read_row(1, 3),
            Err(RasterError::RowOutOfRange { row: 3, rows: 3 })
        ));
    }

    #[test]
    fn test_dimension_mismatch() {
        let result = MemoryRaster::new(extent(2, 2), vec![0.0; 3]);
        assert!(matches!(
            result,
            Err(RasterError::DimensionMismatch { expected: 4, actual: 3, .. })
        ));
    }
}
