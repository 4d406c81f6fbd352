//! Geographic coordinate to raster index mapping.
//!
//! Columns are clamped into the raster here: samples west or east of the
//! raster collapse onto the nearest edge column. Rows keep their raw indices
//! so the resampler can fall back to the single in-bounds neighbour.
//!
//! Offsets on both axes are taken against the ceiling index,
//! `frac - ceil(frac)`, so they lie in `(-1, 0]` and are zero only on a pixel
//! boundary. The reference meshes were produced with this convention.

use dtm_raster::GeoExtent;

/// Raster neighbours of one target x sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSample {
    /// Column at or west of the sample, clamped to `[0, cols-1]`.
    pub west: usize,
    /// Column at or east of the sample, clamped to `[0, cols-1]`.
    pub east: usize,
    /// `frac - ceil(frac)`, in `(-1, 0]`.
    pub offset: f64,
}

/// Raster neighbours of one target y sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSample {
    /// Row at or north of the sample (unclamped, may be -1).
    pub north: i64,
    /// Row at or south of the sample (unclamped, may be `rows`).
    pub south: i64,
    /// `frac - ceil(frac)`, in `(-1, 0]`.
    pub offset: f64,
}

/// Map every target x sample to its west/east raster columns.
pub fn map_columns(xs: &[f64], extent: &GeoExtent) -> Vec<ColumnSample> {
    let last = extent.cols.saturating_sub(1) as i64;
    xs.iter()
        .map(|&x| {
            let frac = extent.fractional_col(x);
            let east = frac.ceil();
            ColumnSample {
                west: (frac.floor() as i64).clamp(0, last) as usize,
                east: (east as i64).clamp(0, last) as usize,
                offset: frac - east,
            }
        })
        .collect()
}

/// Map a target y sample to its north/south raster rows.
///
/// `pixel_height` keeps its sign, so for a north-up raster the south row is
/// numerically larger than the north row.
pub fn map_row(y: f64, extent: &GeoExtent) -> RowSample {
    let frac = extent.fractional_row(y);
    let south = frac.ceil();
    RowSample {
        north: frac.floor() as i64,
        south: south as i64,
        offset: frac - south,
    }
}
