//! # dtm-runner
//!
//! Command-line front end for [`dtm_mesh`]: reads a GeoTIFF, merges the
//! YAML configuration with command-line options and writes the OBJ solid.

mod cli;
mod config;
mod run;

pub use cli::Args;
pub use config::{
    BlockSection, FileConfig, RunConfig, DEFAULT_BAND, DEFAULT_EXAGGERATION,
    DEFAULT_MIN_THICKNESS, DEFAULT_SPACING, DEFAULT_WIDTH,
};
pub use run::{run, LogProgress, RunError};
