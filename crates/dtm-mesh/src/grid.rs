//! Target grid planning.

use crate::{ConfigError, PhysicalBlock};
use tracing::info;

/// Upper bound on `rows * cols` for a planned grid.
pub const MAX_GRID_VERTICES: usize = 100_000_000;

/// Row/column counts and spacing of the target mesh grid.
///
/// The spacing is back-adjusted so that `x0 + (cols-1)*dx == x1` and
/// `y0 + (rows-1)*dy == y1` for the block the plan was made from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPlan {
    /// Number of grid rows (south to north).
    pub rows: usize,
    /// Number of grid columns (west to east).
    pub cols: usize,
    /// Adjusted x spacing.
    pub dx: f64,
    /// Adjusted y spacing.
    pub dy: f64,
}

impl GridPlan {
    /// Number of grid vertices.
    pub fn vertex_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// Plan the grid for a physical block.
///
/// `rows = 1 + round(y_span/dy)` and `cols = 1 + round(x_span/dx)`. When the
/// requested spacing does not land exactly on the far boundary it is
/// recomputed from the rounded count.
pub fn plan_grid(block: &PhysicalBlock) -> Result<GridPlan, ConfigError> {
    let (rows, dy) = plan_axis("dy", block.y0, block.y1, block.dy)?;
    let (cols, dx) = plan_axis("dx", block.x0, block.x1, block.dx)?;

    if rows < 2 || cols < 2 {
        return Err(ConfigError::DegenerateGrid { rows, cols });
    }
    match rows.checked_mul(cols) {
        Some(vertices) if vertices <= MAX_GRID_VERTICES => {}
        _ => return Err(ConfigError::GridTooLarge { rows, cols }),
    }

    Ok(GridPlan {
        rows,
        cols,
        dx: adjust_spacing("dx", block.x0, block.x1, dx, cols),
        dy: adjust_spacing("dy", block.y0, block.y1, dy, rows),
    })
}

fn plan_axis(
    axis: &'static str,
    lo: f64,
    hi: f64,
    spacing: f64,
) -> Result<(usize, f64), ConfigError> {
    let span = hi - lo;
    if !(span > 0.0) {
        return Err(ConfigError::NonPositiveSpan {
            what: "lab block",
            axis: if axis == "dx" { "x" } else { "y" },
            lo,
            hi,
        });
    }
    if !(spacing > 0.0) {
        return Err(ConfigError::NonPositiveSpacing {
            axis,
            value: spacing,
        });
    }
    // float to int casts saturate, so a huge ratio stays representable
    let count = ((span / spacing).round() as usize).saturating_add(1);
    Ok((count, spacing))
}

fn adjust_spacing(axis: &str, lo: f64, hi: f64, spacing: f64, count: usize) -> f64 {
    if lo + (count - 1) as f64 * spacing == hi {
        return spacing;
    }
    let adjusted = (hi - lo) / (count - 1) as f64;
    info!(
        "{} has been shifted to preserve block geometry: {:.3} -> {:.3}",
        axis, spacing, adjusted
    );
    adjusted
}

/// `n` evenly spaced samples from `start` to `end`, both endpoints exact.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = end;
            values
        }
    }
}
