//! Raster to target grid interpolation.
//!
//! Rows are blended with squared weights and renormalized:
//!
//! ```text
//! z = (north * (1-o)^2 + south * o^2) / ((1-o)^2 + o^2)
//! ```
//!
//! Columns are then blended linearly, `west * (1-o) + east * o`. The two
//! axes are not symmetric.
//!
//! Offsets are measured against the ceiling index and are never positive
//! (see [`map_columns`]). The row blend is still a weighted average of its
//! two rows, but leans toward the north row. The column blend extrapolates
//! past the west column: between pixels the result is the linear value one
//! pixel further west. Output must match meshes produced with this scheme.
//!
//! [`map_columns`]: crate::map_columns

use crate::mapping::{map_columns, map_row, ColumnSample, RowSample};
use crate::progress::{ProgressObserver, Stage};
use crate::ElevationGrid;
use dtm_raster::{RasterError, RasterSource};
use tracing::debug;

/// How a target row is built from raster rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowBlend {
    /// Only one raster row is usable; its data is taken unweighted.
    Single(usize),
    /// Squared-weight blend of two raster rows.
    Pair {
        /// Northern raster row.
        north: usize,
        /// Southern raster row.
        south: usize,
        /// Row offset, `frac - ceil(frac)`.
        offset: f64,
    },
}

impl RowBlend {
    /// Resolve a mapped row sample against a raster of `rows` rows.
    ///
    /// A north index of -1 (or below) falls back to the south row, a south
    /// index past the last row falls back to the north row. Either way the
    /// index is clamped into the raster, so this never fails.
    pub fn resolve(sample: RowSample, rows: usize) -> Self {
        let last = rows.saturating_sub(1) as i64;
        let clamp = |i: i64| i.clamp(0, last) as usize;

        if sample.north < 0 {
            RowBlend::Single(clamp(sample.south))
        } else if sample.south > last {
            RowBlend::Single(clamp(sample.north))
        } else if sample.north == sample.south {
            RowBlend::Single(clamp(sample.north))
        } else {
            RowBlend::Pair {
                north: clamp(sample.north),
                south: clamp(sample.south),
                offset: sample.offset,
            }
        }
    }
}

/// Keeps the raster rows used by the previous target row.
///
/// Neighbouring target rows usually share raster rows, so each raster row is
/// read at most once per target row and typically once overall.
struct RowCache<'a, R: ?Sized> {
    raster: &'a R,
    band: usize,
    cols: usize,
    rows: Vec<(usize, Vec<f64>)>,
    reads: usize,
}

impl<'a, R: RasterSource + ?Sized> RowCache<'a, R> {
    fn new(raster: &'a R, band: usize, cols: usize) -> Self {
        Self {
            raster,
            band,
            cols,
            rows: Vec::with_capacity(2),
            reads: 0,
        }
    }

    /// Make exactly `wanted` resident, in that order.
    fn load(&mut self, wanted: &[usize]) -> Result<&[(usize, Vec<f64>)], RasterError> {
        let mut loaded = Vec::with_capacity(wanted.len());
        for &index in wanted {
            let data = match self.rows.iter().position(|(i, _)| *i == index) {
                Some(pos) => self.rows.swap_remove(pos).1,
                None => {
                    self.reads += 1;
                    let data = self.raster.read_row(self.band, index)?;
                    if data.len() != self.cols {
                        return Err(RasterError::DimensionMismatch {
                            cols: self.cols,
                            rows: 1,
                            expected: self.cols,
                            actual: data.len(),
                        });
                    }
                    data
                }
            };
            loaded.push((index, data));
        }
        self.rows = loaded;
        Ok(&self.rows)
    }
}

/// Interpolate the raster onto the grid spanned by `xs` (west to east) and
/// `ys` (south to north), both in geographic units.
pub fn resample<R, P>(
    raster: &R,
    band: usize,
    xs: &[f64],
    ys: &[f64],
    progress: &mut P,
) -> Result<ElevationGrid, RasterError>
where
    R: RasterSource + ?Sized,
    P: ProgressObserver + ?Sized,
{
    let extent = raster.extent();
    let columns = map_columns(xs, &extent);
    let mut grid = ElevationGrid::new(ys.len(), xs.len());
    let mut cache = RowCache::new(raster, band, extent.cols);

    for (r, &y) in ys.iter().enumerate() {
        let blend = RowBlend::resolve(map_row(y, &extent), extent.rows);
        let out = grid.row_mut(r);

        match blend {
            RowBlend::Single(index) => {
                let rows = cache.load(&[index])?;
                let data = &rows[0].1;
                blend_columns(out, &columns, |i| data[i]);
            }
            RowBlend::Pair {
                north,
                south,
                offset,
            } => {
                let rows = cache.load(&[north, south])?;
                let (north_data, south_data) = (&rows[0].1, &rows[1].1);
                let north_weight = (1.0 - offset) * (1.0 - offset);
                let south_weight = offset * offset;
                let norm = north_weight + south_weight;
                blend_columns(out, &columns, |i| {
                    (north_data[i] * north_weight + south_data[i] * south_weight) / norm
                });
            }
        }

        progress.on_progress(Stage::Resample, r + 1, ys.len());
    }

    debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        raster_reads = cache.reads,
        "Resampled raster onto target grid"
    );

    Ok(grid)
}

fn blend_columns(out: &mut [f64], columns: &[ColumnSample], value_at: impl Fn(usize) -> f64) {
    for (z, col) in out.iter_mut().zip(columns) {
        *z = value_at(col.west) * (1.0 - col.offset) + value_at(col.east) * col.offset;
    }
}
