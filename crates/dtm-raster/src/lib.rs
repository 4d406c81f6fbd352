//! # dtm-raster
//!
//! Digital Terrain Model (DTM) raster access.
//!
//! This crate provides the raster side of the `dtm2obj` pipeline:
//! - [`GeoExtent`]: the affine pixel-to-geographic mapping of a raster
//! - [`RasterSource`]: row-oriented access to elevation samples
//! - [`GeoTiffRaster`]: a single-band GeoTIFF loaded with the `tiff` crate
//! - [`MemoryRaster`]: an in-memory raster for tests and synthetic terrain
//!
//! ## Georeferencing
//!
//! GeoTIFF files carry their geotransform either as a tiepoint plus pixel
//! scale (the common case for DTMs exported by GDAL) or as a full model
//! transformation matrix. Both are supported as long as the raster is not
//! rotated. Row 0 is the northern edge of a north-up raster, so the pixel
//! height of such a raster is negative.
//!
//! ## Example
//!
//! ```no_run
//! use dtm_raster::{GeoTiffRaster, RasterSource};
//!
//! let raster = GeoTiffRaster::open("momotombo_20m.tif")?;
//! let extent = raster.extent();
//! println!("{} x {} pixels", extent.cols, extent.rows);
//!
//! let first_row = raster.read_row(1, 0)?;
//! assert_eq!(first_row.len(), extent.cols);
//! # Ok::<(), dtm_raster::RasterError>(())
//! ```

mod error;
mod extent;
mod geotiff;
mod memory;
mod source;

pub use error::RasterError;
pub use extent::GeoExtent;
pub use geotiff::{
    GeoTiffRaster, GDAL_NODATA_TAG, MODEL_PIXEL_SCALE_TAG, MODEL_TIEPOINT_TAG,
    MODEL_TRANSFORMATION_TAG,
};
pub use memory::MemoryRaster;
pub use source::RasterSource;

/// Result type for raster operations.
pub type Result<T> = std::result::Result<T, RasterError>;
