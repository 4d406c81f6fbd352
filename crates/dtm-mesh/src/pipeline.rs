//! End-to-end raster to mesh conversion.

use crate::assemble::assemble;
use crate::grid::{linspace, plan_grid, GridPlan};
use crate::normalize::{normalize, ElevationStats, VerticalScale};
use crate::progress::ProgressObserver;
use crate::resample::resample;
use crate::{ConfigError, Mesh, MeshConfig, MeshError, TargetRegion};
use dtm_raster::RasterSource;
use tracing::{debug, info};

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct MeshOutput {
    /// The assembled solid.
    pub mesh: Mesh,
    /// Grid plan, including any spacing adjustment.
    pub plan: GridPlan,
    /// Geographic region that was resampled.
    pub region: TargetRegion,
    /// Elevation range before normalization.
    pub stats: ElevationStats,
}

/// Convert a raster into a closed solid.
///
/// All configuration is validated, and the region checked against the
/// raster coverage, before the first raster row is read.
pub fn build_mesh<R, P>(
    raster: &R,
    config: &MeshConfig,
    progress: &mut P,
) -> Result<MeshOutput, MeshError>
where
    R: RasterSource + ?Sized,
    P: ProgressObserver + ?Sized,
{
    config.validate()?;
    let block = &config.block;
    let plan = plan_grid(block)?;

    let extent = raster.extent();
    let region = config.resolve_region(&extent);
    region.validate()?;
    region.check_within(&extent)?;

    debug!(
        rows = plan.rows,
        cols = plan.cols,
        dx = plan.dx,
        dy = plan.dy,
        "Planned target grid"
    );

    let lab_xs = linspace(block.x0, block.x1, plan.cols);
    let lab_ys = linspace(block.y0, block.y1, plan.rows);
    let geo_xs = linspace(region.x0, region.x1, plan.cols);
    let geo_ys = linspace(region.y0, region.y1, plan.rows);

    let mut grid = resample(raster, config.band, &geo_xs, &geo_ys, progress)?;
    let stats = normalize(&mut grid, &VerticalScale::new(block, &region)).ok_or(
        ConfigError::DegenerateGrid {
            rows: plan.rows,
            cols: plan.cols,
        },
    )?;

    let mesh = assemble(&grid, &lab_xs, &lab_ys, progress);

    info!(
        vertices = mesh.vertices().len(),
        faces = mesh.faces().len(),
        min_elevation = stats.min,
        max_elevation = stats.max,
        "Assembled mesh"
    );

    Ok(MeshOutput {
        mesh,
        plan,
        region,
        stats,
    })
}
