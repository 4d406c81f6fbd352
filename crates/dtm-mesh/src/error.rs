//! Error types for mesh generation.

use dtm_raster::RasterError;
use thiserror::Error;

/// Invalid user configuration, detected before any raster is read.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A requested area has zero or negative extent along an axis.
    #[error("{what} has a negative or 0 {axis} span ({lo} .. {hi})")]
    NonPositiveSpan {
        /// Which area ("lab block" or "geographic region").
        what: &'static str,
        /// Axis name ("x" or "y").
        axis: &'static str,
        /// Lower bound.
        lo: f64,
        /// Upper bound.
        hi: f64,
    },

    /// Grid spacing is zero or negative.
    #[error("lab block has 0 or negative {axis} spacing ({value})")]
    NonPositiveSpacing {
        /// Axis name ("dx" or "dy").
        axis: &'static str,
        /// Requested spacing.
        value: f64,
    },

    /// Minimum base thickness is zero or negative.
    #[error("lab block has a negative or 0 minimum thickness ({0})")]
    NonPositiveThickness(f64),

    /// Vertical exaggeration is zero or negative.
    #[error("vertical exaggeration must be positive ({0})")]
    NonPositiveExaggeration(f64),

    /// A configuration value is NaN or infinite.
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),

    /// The planned grid has fewer than two rows or columns.
    #[error("grid of {rows} row(s) x {cols} column(s) is degenerate; spacing is too coarse for the block")]
    DegenerateGrid {
        /// Planned rows.
        rows: usize,
        /// Planned columns.
        cols: usize,
    },

    /// The planned grid exceeds [`MAX_GRID_VERTICES`].
    ///
    /// [`MAX_GRID_VERTICES`]: crate::MAX_GRID_VERTICES
    #[error("grid of {rows} row(s) x {cols} column(s) is too large; spacing is too fine for the block")]
    GridTooLarge {
        /// Planned rows.
        rows: usize,
        /// Planned columns.
        cols: usize,
    },
}

/// Raster edge named in a bounds error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Western boundary (minimum x).
    West,
    /// Eastern boundary (maximum x).
    East,
    /// Southern boundary (minimum y).
    South,
    /// Northern boundary (maximum y).
    North,
}

impl Edge {
    /// Returns the edge as a lowercase string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Edge::West => "western",
            Edge::East => "eastern",
            Edge::South => "southern",
            Edge::North => "northern",
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while building or writing a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Requested geographic region exceeds the raster coverage.
    #[error("Desired geographic region exceeds raster boundary: {edge} boundary {value:.2} is beyond {limit:.2}")]
    OutOfBounds {
        /// Offending edge of the region.
        edge: Edge,
        /// Requested coordinate.
        value: f64,
        /// Raster coverage limit on that edge.
        limit: f64,
    },

    /// Raster could not be opened or read.
    #[error("Raster error: {0}")]
    Raster(#[from] RasterError),

    /// Output could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
