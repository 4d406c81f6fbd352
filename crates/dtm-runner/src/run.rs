//! Raster to OBJ conversion run.

use crate::RunConfig;
use dtm_mesh::{build_mesh, save_obj, ConfigError, MeshError, MeshOutput, ProgressObserver, Stage};
use dtm_raster::{GeoTiffRaster, RasterError, RasterSource};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during a conversion run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Missing required option: --{0}")]
    MissingOption(&'static str),

    #[error("--region takes 4 values (x0 x1 y0 y1), got {0}")]
    RegionArity(usize),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error("Failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Logs pipeline progress in 10% steps.
#[derive(Debug, Default)]
pub struct LogProgress {
    stage: Option<Stage>,
    next_percent: usize,
}

impl ProgressObserver for LogProgress {
    fn on_progress(&mut self, stage: Stage, done: usize, total: usize) {
        if self.stage != Some(stage) {
            self.stage = Some(stage);
            self.next_percent = 10;
        }
        if total == 0 {
            return;
        }
        let percent = done * 100 / total;
        if percent >= self.next_percent {
            let step = percent / 10 * 10;
            info!("{}: {}%", stage, step);
            self.next_percent = step + 10;
        }
    }
}

/// Convert the configured raster into an OBJ solid.
///
/// Nothing is written unless the mesh is built successfully.
pub fn run(config: &RunConfig) -> Result<MeshOutput, RunError> {
    config.validate()?;
    let raster = GeoTiffRaster::open(&config.input)?;
    let extent = raster.extent();
    let (cols, rows) = raster.dimensions();

    info!("Loaded {} ({} x {})", config.input.display(), cols, rows);
    info!(
        "Raster range: -R{}/{}/{}/{}",
        extent.x_min(),
        extent.x_max(),
        extent.y_min(),
        extent.y_max()
    );
    if let Some(no_data) = raster.no_data_value() {
        warn!(
            "Raster declares nodata value {}; nodata cells are resampled like any other elevation",
            no_data
        );
    }

    let mesh_config = config.mesh_config(&extent)?;
    let output = build_mesh(&raster, &mesh_config, &mut LogProgress::default())?;

    let comments = header_comments(config, &mesh_config, &output);
    save_obj(&config.output, &output.mesh, &comments).map_err(|source| RunError::WriteOutput {
        path: config.output.clone(),
        source,
    })?;

    info!(
        "Wrote {} ({} vertices, {} faces)",
        config.output.display(),
        output.mesh.vertices().len(),
        output.mesh.faces().len()
    );
    Ok(output)
}

/// Provenance lines for the OBJ header.
fn header_comments(
    config: &RunConfig,
    mesh_config: &dtm_mesh::MeshConfig,
    output: &MeshOutput,
) -> Vec<String> {
    let block = &mesh_config.block;
    let region = &output.region;
    vec![
        format!("Created with dtm2obj {}", env!("CARGO_PKG_VERSION")),
        format!("Source raster: {} (band {})", config.input.display(), mesh_config.band),
        format!(
            "Region: x {} to {}, y {} to {}",
            region.x0, region.x1, region.y0, region.y1
        ),
        format!(
            "Block: {} x {}, min thickness {}, vertical exaggeration {}",
            block.x_span(),
            block.y_span(),
            block.min_thickness,
            block.vert_exaggeration
        ),
        format!(
            "Grid: {} rows x {} cols, dx {:.3}, dy {:.3}",
            output.plan.rows, output.plan.cols, output.plan.dx, output.plan.dy
        ),
        format!(
            "Elevation range: {} to {}",
            output.stats.min, output.stats.max
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_progress_steps() {
        let mut progress = LogProgress::default();
        for done in 1..=25 {
            progress.on_progress(Stage::Resample, done, 25);
        }
        assert_eq!(progress.stage, Some(Stage::Resample));
        assert_eq!(progress.next_percent, 110);

        // A new stage starts over
        progress.on_progress(Stage::Assemble, 1, 100);
        assert_eq!(progress.stage, Some(Stage::Assemble));
        assert_eq!(progress.next_percent, 10);
        progress.on_progress(Stage::Assemble, 37, 100);
        assert_eq!(progress.next_percent, 40);
    }

    fn config_in(dir: &std::path::Path) -> RunConfig {
        RunConfig {
            input: dir.join("missing.tif"),
            output: dir.join("out.obj"),
            region: None,
            width: 10.0,
            height: None,
            dx: 1.0,
            dy: 1.0,
            min_thickness: 1.0,
            exaggeration: 1.0,
            band: 1,
        }
    }

    #[test]
    fn test_missing_input_raster() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let err = run(&config).unwrap_err();
        assert!(matches!(err, RunError::Raster(RasterError::FileNotFound(_))));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_config_checked_before_raster_is_opened() {
        let dir = tempfile::tempdir().unwrap();
        // The input does not exist either; the configuration error wins
        let config = RunConfig {
            dx: -1.0,
            min_thickness: 0.0,
            ..config_in(dir.path())
        };
        let err = run(&config).unwrap_err();
        assert!(matches!(err, RunError::Config(_)));
        assert!(!config.output.exists());
    }
}
