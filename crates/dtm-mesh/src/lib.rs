//! # dtm-mesh
//!
//! Turn a Digital Terrain Model into a closed, printable solid.
//!
//! The conversion runs as a strict pipeline:
//!
//! 1. **Grid planning** ([`plan_grid`]): row/column counts of the physical
//!    block, with spacing adjusted so the grid hits the block edges exactly.
//! 2. **Coordinate mapping** ([`map_columns`], [`map_row`]): target samples to
//!    neighbouring raster rows and columns.
//! 3. **Resampling** ([`resample`]): squared-weight row blend, linear column
//!    blend, one raster read per raster row in use.
//! 4. **Vertical normalization** ([`normalize`]): elevations to physical
//!    thickness with exaggeration and a minimum base.
//! 5. **Assembly** ([`assemble`]): top triangles, four walls and a base,
//!    forming a closed 2-manifold.
//! 6. **Output** ([`write_obj`], [`save_obj`]): ASCII OBJ.
//!
//! [`build_mesh`] runs steps 1-5 against any [`RasterSource`].
//!
//! ## Example
//!
//! ```
//! use dtm_mesh::{build_mesh, MeshConfig, NoProgress, PhysicalBlock, TargetRegion};
//! use dtm_raster::{GeoExtent, MemoryRaster};
//!
//! let extent = GeoExtent {
//!     x_origin: 0.0,
//!     y_origin: 100.0,
//!     pixel_width: 1.0,
//!     pixel_height: -1.0,
//!     rows: 100,
//!     cols: 100,
//! };
//! let raster = MemoryRaster::constant(extent, 50.0);
//!
//! let config = MeshConfig {
//!     region: Some(TargetRegion { x0: 10.0, x1: 20.0, y0: 10.0, y1: 20.0 }),
//!     block: PhysicalBlock::default(),
//!     band: 1,
//! };
//!
//! let output = build_mesh(&raster, &config, &mut NoProgress)?;
//! assert_eq!(output.mesh.vertices().len(), 125);
//! assert_eq!(output.mesh.faces().len(), 205);
//! # Ok::<(), dtm_mesh::MeshError>(())
//! ```
//!
//! [`RasterSource`]: dtm_raster::RasterSource

mod assemble;
mod config;
mod elevation;
mod error;
mod grid;
mod mapping;
mod normalize;
mod obj;
mod pipeline;
mod progress;
mod resample;

pub use assemble::{assemble, vertex_index, BaseCorners, Face, Mesh, Vertex};
pub use config::{MeshConfig, PhysicalBlock, TargetRegion};
pub use elevation::ElevationGrid;
pub use error::{ConfigError, Edge, MeshError};
pub use grid::{linspace, plan_grid, GridPlan, MAX_GRID_VERTICES};
pub use mapping::{map_columns, map_row, ColumnSample, RowSample};
pub use normalize::{normalize, ElevationStats, VerticalScale};
pub use obj::{save_obj, write_obj};
pub use pipeline::{build_mesh, MeshOutput};
pub use progress::{NoProgress, ProgressObserver, Stage};
pub use resample::{resample, RowBlend};

/// Result type for mesh operations.
pub type Result<T> = std::result::Result<T, MeshError>;
