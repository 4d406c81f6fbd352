//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Convert a GeoTIFF Digital Terrain Model into a closed OBJ solid
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "dtm2obj", version)]
#[command(about = "Convert a GeoTIFF Digital Terrain Model into a closed, printable OBJ solid")]
pub struct Args {
    /// Input GeoTIFF raster
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output OBJ file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// YAML configuration file; command-line values take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Geographic region to convert (default: whole raster)
    #[arg(
        long,
        num_args = 4,
        value_names = ["X0", "X1", "Y0", "Y1"],
        allow_negative_numbers = true
    )]
    pub region: Option<Vec<f64>>,

    /// Block width in physical units [default: 10]
    #[arg(long)]
    pub width: Option<f64>,

    /// Block height in physical units [default: from the region aspect ratio]
    #[arg(long)]
    pub height: Option<f64>,

    /// Grid spacing along x [default: 1]
    #[arg(long)]
    pub dx: Option<f64>,

    /// Grid spacing along y [default: 1]
    #[arg(long)]
    pub dy: Option<f64>,

    /// Thickness below the lowest point of the surface [default: 1]
    #[arg(long)]
    pub min_thickness: Option<f64>,

    /// Vertical exaggeration [default: 1]
    #[arg(long)]
    pub exaggeration: Option<f64>,

    /// Raster band, 1-based [default: 1]
    #[arg(long)]
    pub band: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Filter directive for the log subscriber.
    pub fn log_filter(&self) -> &str {
        if self.quiet {
            "warn"
        } else {
            &self.log_level
        }
    }
}
