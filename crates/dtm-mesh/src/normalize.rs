//! Conversion of elevations into physical block thickness.

use crate::{ElevationGrid, PhysicalBlock, TargetRegion};
use tracing::{debug, warn};

/// Parameters of the vertical rescaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalScale {
    /// Relief multiplier.
    pub exaggeration: f64,
    /// East-west span of the physical block.
    pub physical_x_span: f64,
    /// East-west span of the geographic region.
    pub geo_x_span: f64,
    /// Thickness added under the lowest point.
    pub min_thickness: f64,
}

impl VerticalScale {
    /// Take the fields the normalizer needs from the block and region.
    pub fn new(block: &PhysicalBlock, region: &TargetRegion) -> Self {
        Self {
            exaggeration: block.vert_exaggeration,
            physical_x_span: block.x_span(),
            geo_x_span: region.x_span(),
            min_thickness: block.min_thickness,
        }
    }

    /// Multiplier applied to elevations after the floor is removed.
    ///
    /// Elevation shrinks by the same ratio as the horizontal geography.
    pub fn factor(&self) -> f64 {
        self.exaggeration * self.physical_x_span / self.geo_x_span
    }
}

/// Elevation range observed before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationStats {
    /// Lowest resampled elevation.
    pub min: f64,
    /// Highest resampled elevation.
    pub max: f64,
}

/// Rescale `grid` in place: subtract the minimum, multiply by
/// [`VerticalScale::factor`], then add the minimum thickness.
///
/// The order is fixed; the lowest vertex ends up exactly at
/// `min_thickness`.
pub fn normalize(grid: &mut ElevationGrid, scale: &VerticalScale) -> Option<ElevationStats> {
    let (min, max) = (grid.min()?, grid.max()?);
    let factor = scale.factor();

    if min == max {
        warn!(elevation = min, "Resampled surface is flat; top will sit at the minimum thickness");
    }

    // floor, then scale, then offset
    for z in grid.values_mut() {
        *z = (*z - min) * factor + scale.min_thickness;
    }

    debug!(min, max, factor, "Normalized elevations");
    Some(ElevationStats { min, max })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scale(exaggeration: f64) -> VerticalScale {
        VerticalScale {
            exaggeration,
            physical_x_span: 10.0,
            geo_x_span: 1000.0,
            min_thickness: 2.0,
        }
    }

    fn grid() -> ElevationGrid {
        ElevationGrid::from_vec(2, 2, vec![1200.0, 1250.0, 1300.0, 1400.0]).unwrap()
    }

    #[test]
    fn test_floor_scale_offset() {
        let mut grid = grid();
        let stats = normalize(&mut grid, &scale(1.0)).unwrap();
        assert_eq!(stats, ElevationStats { min: 1200.0, max: 1400.0 });
        assert_eq!(grid.min(), Some(2.0));
        assert_relative_eq!(grid.get(0, 1), 2.0 + 50.0 * 0.01);
        assert_relative_eq!(grid.get(1, 1), 2.0 + 200.0 * 0.01);
    }

    #[test]
    fn test_relief_scales_linearly_with_exaggeration() {
        let relief = |e: f64| {
            let mut grid = grid();
            normalize(&mut grid, &scale(e)).unwrap();
            grid.max().unwrap() - grid.min().unwrap()
        };
        assert_relative_eq!(relief(3.0), 3.0 * relief(1.0), max_relative = 1e-12);
        assert_relative_eq!(relief(0.5), 0.5 * relief(1.0), max_relative = 1e-12);
    }

    #[test]
    fn test_flat_surface_collapses_to_thickness() {
        let mut grid = ElevationGrid::from_vec(2, 2, vec![50.0; 4]).unwrap();
        normalize(&mut grid, &scale(4.0)).unwrap();
        assert!(grid.values().iter().all(|&z| z == 2.0));
    }

    #[test]
    fn test_empty_grid() {
        let mut grid = ElevationGrid::new(0, 0);
        assert_eq!(normalize(&mut grid, &scale(1.0)), None);
    }
}
