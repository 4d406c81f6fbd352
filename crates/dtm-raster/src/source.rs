//! Row-oriented raster access.

use crate::{GeoExtent, RasterError, Result};

/// A georeferenced elevation raster that can be read one row at a time.
///
/// Bands are numbered from 1, matching GDAL. Only single-band rasters are
/// supported, so band 1 is the only valid band for the bundled sources.
pub trait RasterSource {
    /// Georeferencing and dimensions of the raster.
    fn extent(&self) -> GeoExtent;

    /// Read one row of samples from the given band.
    ///
    /// The returned vector has exactly `extent().cols` entries, west to east.
    fn read_row(&self, band: usize, row: usize) -> Result<Vec<f64>>;
}

impl<T: RasterSource + ?Sized> RasterSource for &T {
    fn extent(&self) -> GeoExtent {
        (**self).extent()
    }

    fn read_row(&self, band: usize, row: usize) -> Result<Vec<f64>> {
        (**self).read_row(band, row)
    }
}

/// Validate a band/row request against a single-band raster of `rows` rows.
pub(crate) fn check_request(band: usize, row: usize, rows: usize) -> Result<()> {
    if band != 1 {
        return Err(RasterError::BandOutOfRange { band, bands: 1 });
    }
    if row >= rows {
        return Err(RasterError::RowOutOfRange { row, rows });
    }
    Ok(())
}
