//! Error types for the raster crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when opening or reading a raster.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The raster file does not exist.
    #[error("Raster file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O error reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TIFF decoding error.
    #[error("TIFF decode error: {0}")]
    TiffDecode(#[from] tiff::TiffError),

    /// Invalid GeoTIFF - missing or unusable georeferencing.
    #[error("Invalid GeoTIFF: {0}")]
    InvalidGeoTiff(String),

    /// Unsupported data type or sample layout in the TIFF file.
    #[error("Unsupported TIFF data type: {0}")]
    UnsupportedDataType(String),

    /// Requested band does not exist.
    #[error("Band {band} does not exist (raster has {bands} band(s))")]
    BandOutOfRange {
        /// Requested band (1-based).
        band: usize,
        /// Number of bands in the raster.
        bands: usize,
    },

    /// Requested row is outside the raster.
    #[error("Row {row} is outside the raster (0..{rows})")]
    RowOutOfRange {
        /// Requested row index.
        row: usize,
        /// Number of rows in the raster.
        rows: usize,
    },

    /// Sample buffer does not match the declared raster dimensions.
    #[error("Expected {expected} samples for a {cols}x{rows} raster, got {actual}")]
    DimensionMismatch {
        /// Number of columns.
        cols: usize,
        /// Number of rows.
        rows: usize,
        /// Expected sample count.
        expected: usize,
        /// Actual sample count.
        actual: usize,
    },
}
