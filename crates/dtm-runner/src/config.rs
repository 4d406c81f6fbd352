//! Run configuration: YAML file, command line and defaults.
//!
//! Command-line values override YAML values, which override the defaults.

use crate::{Args, RunError};
use dtm_mesh::{MeshConfig, PhysicalBlock, TargetRegion};
use dtm_raster::GeoExtent;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default block width in physical units.
pub const DEFAULT_WIDTH: f64 = 10.0;
/// Default grid spacing along both axes.
pub const DEFAULT_SPACING: f64 = 1.0;
/// Default thickness below the lowest surface point.
pub const DEFAULT_MIN_THICKNESS: f64 = 1.0;
/// Default vertical exaggeration.
pub const DEFAULT_EXAGGERATION: f64 = 1.0;
/// Default raster band.
pub const DEFAULT_BAND: usize = 1;

// ============================================================================
// YAML Schema
// ============================================================================

/// Contents of a YAML configuration file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub region: Option<TargetRegion>,
    #[serde(default)]
    pub block: BlockSection,
    pub band: Option<usize>,
}

/// The `block:` section of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockSection {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub dx: Option<f64>,
    pub dy: Option<f64>,
    pub min_thickness: Option<f64>,
    pub vert_exaggeration: Option<f64>,
}

impl FileConfig {
    /// Parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, RunError> {
        let text = std::fs::read_to_string(path).map_err(|source| RunError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&text)?;
        debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, RunError> {
        Ok(serde_yaml::from_str(text)?)
    }
}

// ============================================================================
// Merged Configuration
// ============================================================================

/// Fully merged settings for one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Geographic region; the whole raster when `None`.
    pub region: Option<TargetRegion>,
    pub width: f64,
    /// Block height; derived from the region aspect ratio when `None`.
    pub height: Option<f64>,
    pub dx: f64,
    pub dy: f64,
    pub min_thickness: f64,
    pub exaggeration: f64,
    pub band: usize,
}

impl RunConfig {
    /// Build the run configuration from the command line, loading the YAML
    /// file it names, if any.
    pub fn from_args(args: &Args) -> Result<Self, RunError> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(args, file)
    }

    /// Merge command-line values over file values over defaults.
    pub fn merge(args: &Args, file: FileConfig) -> Result<Self, RunError> {
        let block = file.block;
        let region = match args.region.as_deref() {
            Some(&[x0, x1, y0, y1]) => Some(TargetRegion { x0, x1, y0, y1 }),
            Some(values) => return Err(RunError::RegionArity(values.len())),
            None => file.region,
        };

        Ok(Self {
            input: args
                .input
                .clone()
                .or(file.input)
                .ok_or(RunError::MissingOption("input"))?,
            output: args
                .output
                .clone()
                .or(file.output)
                .ok_or(RunError::MissingOption("output"))?,
            region,
            width: args.width.or(block.width).unwrap_or(DEFAULT_WIDTH),
            height: args.height.or(block.height),
            dx: args.dx.or(block.dx).unwrap_or(DEFAULT_SPACING),
            dy: args.dy.or(block.dy).unwrap_or(DEFAULT_SPACING),
            min_thickness: args
                .min_thickness
                .or(block.min_thickness)
                .unwrap_or(DEFAULT_MIN_THICKNESS),
            exaggeration: args
                .exaggeration
                .or(block.vert_exaggeration)
                .unwrap_or(DEFAULT_EXAGGERATION),
            band: args.band.or(file.band).unwrap_or(DEFAULT_BAND),
        })
    }

    /// Check every setting that does not depend on the raster extent.
    ///
    /// Runs before the raster is opened. A derived height is checked later,
    /// once the region is known.
    pub fn validate(&self) -> Result<(), RunError> {
        if let Some(region) = &self.region {
            region.validate()?;
        }
        // Any positive stand-in lets the remaining block checks run now
        self.block(self.height.unwrap_or(self.width)).validate()?;
        Ok(())
    }

    fn block(&self, height: f64) -> PhysicalBlock {
        PhysicalBlock {
            x0: 0.0,
            x1: self.width,
            y0: 0.0,
            y1: height,
            dx: self.dx,
            dy: self.dy,
            min_thickness: self.min_thickness,
            vert_exaggeration: self.exaggeration,
        }
    }

    /// Resolve the mesh configuration against the raster being converted.
    ///
    /// The region defaults to the full raster extent, and a missing block
    /// height follows the region's aspect ratio.
    pub fn mesh_config(&self, extent: &GeoExtent) -> Result<MeshConfig, RunError> {
        let region = self
            .region
            .unwrap_or_else(|| TargetRegion::full_extent(extent));
        region.validate()?;

        let height = match self.height {
            Some(height) => height,
            None => {
                let height = self.width * region.y_span() / region.x_span();
                info!("Block height derived from region aspect ratio: {:.3}", height);
                height
            }
        };

        Ok(MeshConfig {
            region: Some(region),
            block: self.block(height),
            band: self.band,
        })
    }
}
