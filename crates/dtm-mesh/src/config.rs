//! Immutable run configuration.
//!
//! A [`MeshConfig`] is validated once, up front, before any raster row is
//! read. Each pipeline stage then receives only the fields it needs.

use crate::{ConfigError, Edge, MeshError};
use dtm_raster::GeoExtent;
use serde::{Deserialize, Serialize};

/// Sub-area of the raster to resample, in the raster's geographic units.
///
/// `y0` is the southern and `y1` the northern boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetRegion {
    /// Western x coordinate.
    pub x0: f64,
    /// Eastern x coordinate.
    pub x1: f64,
    /// Southern y coordinate.
    pub y0: f64,
    /// Northern y coordinate.
    pub y1: f64,
}

impl TargetRegion {
    /// The region covering a raster's whole extent.
    pub fn full_extent(extent: &GeoExtent) -> Self {
        Self {
            x0: extent.x_min(),
            x1: extent.x_max(),
            y0: extent.y_min(),
            y1: extent.y_max(),
        }
    }

    /// East-west span.
    pub fn x_span(&self) -> f64 {
        self.x1 - self.x0
    }

    /// North-south span.
    pub fn y_span(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Check that the region has a positive area.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_finite("geographic region", &[self.x0, self.x1, self.y0, self.y1])?;
        check_span("geographic region", "x", self.x0, self.x1)?;
        check_span("geographic region", "y", self.y0, self.y1)
    }

    /// Check that the region lies within the raster coverage.
    pub fn check_within(&self, extent: &GeoExtent) -> Result<(), MeshError> {
        let checks = [
            (Edge::West, self.x0, extent.x_min(), self.x0 < extent.x_min()),
            (Edge::East, self.x1, extent.x_max(), self.x1 > extent.x_max()),
            (Edge::South, self.y0, extent.y_min(), self.y0 < extent.y_min()),
            (Edge::North, self.y1, extent.y_max(), self.y1 > extent.y_max()),
        ];
        for (edge, value, limit, outside) in checks {
            if outside {
                return Err(MeshError::OutOfBounds { edge, value, limit });
            }
        }
        Ok(())
    }
}

/// Geometry of the physical (printed) block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhysicalBlock {
    /// Western x coordinate.
    pub x0: f64,
    /// Eastern x coordinate.
    pub x1: f64,
    /// Southern y coordinate.
    pub y0: f64,
    /// Northern y coordinate.
    pub y1: f64,
    /// Requested x resolution.
    pub dx: f64,
    /// Requested y resolution.
    pub dy: f64,
    /// Thickness of the solid at its lowest point.
    pub min_thickness: f64,
    /// Relief multiplier, 1.0 for true scale.
    #[serde(default = "default_exaggeration")]
    pub vert_exaggeration: f64,
}

fn default_exaggeration() -> f64 {
    1.0
}

impl Default for PhysicalBlock {
    fn default() -> Self {
        Self {
            x0: 0.0,
            x1: 10.0,
            y0: 0.0,
            y1: 10.0,
            dx: 1.0,
            dy: 1.0,
            min_thickness: 1.0,
            vert_exaggeration: 1.0,
        }
    }
}

impl PhysicalBlock {
    /// East-west span.
    pub fn x_span(&self) -> f64 {
        self.x1 - self.x0
    }

    /// North-south span.
    pub fn y_span(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Check spans, spacing, thickness and exaggeration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_finite(
            "lab block",
            &[
                self.x0,
                self.x1,
                self.y0,
                self.y1,
                self.dx,
                self.dy,
                self.min_thickness,
                self.vert_exaggeration,
            ],
        )?;
        check_span("lab block", "x", self.x0, self.x1)?;
        check_span("lab block", "y", self.y0, self.y1)?;
        if self.min_thickness <= 0.0 {
            return Err(ConfigError::NonPositiveThickness(self.min_thickness));
        }
        if self.dx <= 0.0 {
            return Err(ConfigError::NonPositiveSpacing {
                axis: "dx",
                value: self.dx,
            });
        }
        if self.dy <= 0.0 {
            return Err(ConfigError::NonPositiveSpacing {
                axis: "dy",
                value: self.dy,
            });
        }
        if self.vert_exaggeration <= 0.0 {
            return Err(ConfigError::NonPositiveExaggeration(self.vert_exaggeration));
        }
        Ok(())
    }
}

/// Full configuration of one raster-to-mesh run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MeshConfig {
    /// Geographic sub-region; the whole raster when `None`.
    #[serde(default)]
    pub region: Option<TargetRegion>,
    /// Physical block geometry.
    #[serde(default)]
    pub block: PhysicalBlock,
    /// Raster band to read (1-based).
    #[serde(default = "default_band")]
    pub band: usize,
}

fn default_band() -> usize {
    1
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            region: None,
            block: PhysicalBlock::default(),
            band: default_band(),
        }
    }
}

impl MeshConfig {
    /// Validate everything that can be checked without the raster.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.block.validate()?;
        if let Some(region) = &self.region {
            region.validate()?;
        }
        Ok(())
    }

    /// The region to resample: the configured one, or the full raster.
    pub fn resolve_region(&self, extent: &GeoExtent) -> TargetRegion {
        self.region
            .unwrap_or_else(|| TargetRegion::full_extent(extent))
    }
}

fn check_finite(what: &'static str, values: &[f64]) -> Result<(), ConfigError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ConfigError::NonFinite(what))
    }
}

fn check_span(what: &'static str, axis: &'static str, lo: f64, hi: f64) -> Result<(), ConfigError> {
    if hi <= lo {
        return Err(ConfigError::NonPositiveSpan { what, axis, lo, hi });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent() -> GeoExtent {
        GeoExtent {
            x_origin: 0.0,
            y_origin: 100.0,
            pixel_width: 1.0,
            pixel_height: -1.0,
            rows: 100,
            cols: 100,
        }
    }

    #[test]
    fn test_default_block_is_valid() {
        assert!(PhysicalBlock::default().validate().is_ok());
        assert!(MeshConfig::default().validate().is_ok());
    }

    #[test]
    fn test_block_rejects_bad_values() {
        let block = PhysicalBlock {
            x1: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            block.validate(),
            Err(ConfigError::NonPositiveSpan { axis: "x", .. })
        ));

        let block = PhysicalBlock {
            min_thickness: 0.0,
            ..Default::default()
        };
        assert_eq!(block.validate(), Err(ConfigError::NonPositiveThickness(0.0)));

        let block = PhysicalBlock {
            dy: -1.0,
            ..Default::default()
        };
        assert_eq!(
            block.validate(),
            Err(ConfigError::NonPositiveSpacing {
                axis: "dy",
                value: -1.0
            })
        );

        let block = PhysicalBlock {
            vert_exaggeration: 0.0,
            ..Default::default()
        };
        assert_eq!(block.validate(), Err(ConfigError::NonPositiveExaggeration(0.0)));

        let block = PhysicalBlock {
            dx: f64::NAN,
            ..Default::default()
        };
        assert_eq!(block.validate(), Err(ConfigError::NonFinite("lab block")));
    }

    #[test]
    fn test_region_rejects_empty_area() {
        let region = TargetRegion {
            x0: 10.0,
            x1: 20.0,
            y0: 20.0,
            y1: 20.0,
        };
        assert!(matches!(
            region.validate(),
            Err(ConfigError::NonPositiveSpan { axis: "y", .. })
        ));
    }

    #[test]
    fn test_region_bounds() {
        let inside = TargetRegion {
            x0: 10.0,
            x1: 20.0,
            y0: 10.0,
            y1: 20.0,
        };
        assert!(inside.check_within(&extent()).is_ok());

        let full = TargetRegion::full_extent(&extent());
        assert!(full.check_within(&extent()).is_ok());

        let north = TargetRegion { y1: 100.5, ..inside };
        assert!(matches!(
            north.check_within(&extent()),
            Err(MeshError::OutOfBounds {
                edge: Edge::North,
                ..
            })
        ));

        let west = TargetRegion { x0: -1.0, ..inside };
        assert!(matches!(
            west.check_within(&extent()),
            Err(MeshError::OutOfBounds {
                edge: Edge::West,
                ..
            })
        ));
    }

    #[test]
    fn test_resolve_region_defaults_to_full_extent() {
        let config = MeshConfig::default();
        let region = config.resolve_region(&extent());
        assert_eq!(
            region,
            TargetRegion {
                x0: 0.0,
                x1: 100.0,
                y0: 0.0,
                y1: 100.0
            }
        );
    }
}
