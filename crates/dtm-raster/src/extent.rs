//! Raster georeferencing.

/// Affine mapping from raster pixel indices to geographic coordinates.
///
/// The origin is the upper-left corner of pixel (0, 0). For a north-up
/// raster `pixel_height` is negative: row indices grow southward while
/// geographic y shrinks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoExtent {
    /// Geographic x of the upper-left corner.
    pub x_origin: f64,
    /// Geographic y of the upper-left corner.
    pub y_origin: f64,
    /// Pixel size along x (geographic units per column).
    pub pixel_width: f64,
    /// Pixel size along y (negative for north-up rasters).
    pub pixel_height: f64,
    /// Number of raster rows.
    pub rows: usize,
    /// Number of raster columns.
    pub cols: usize,
}

impl GeoExtent {
    /// Geographic x of the western edge.
    pub fn x_min(&self) -> f64 {
        self.x_origin.min(self.x_far())
    }

    /// Geographic x of the eastern edge.
    pub fn x_max(&self) -> f64 {
        self.x_origin.max(self.x_far())
    }

    /// Geographic y of the southern edge.
    pub fn y_min(&self) -> f64 {
        self.y_origin.min(self.y_far())
    }

    /// Geographic y of the northern edge.
    pub fn y_max(&self) -> f64 {
        self.y_origin.max(self.y_far())
    }

    /// Check if a geographic coordinate lies within the raster coverage.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min() && x <= self.x_max() && y >= self.y_min() && y <= self.y_max()
    }

    /// Fractional column of a geographic x coordinate.
    pub fn fractional_col(&self, x: f64) -> f64 {
        (x - self.x_origin) / self.pixel_width
    }

    /// Fractional row of a geographic y coordinate.
    pub fn fractional_row(&self, y: f64) -> f64 {
        (y - self.y_origin) / self.pixel_height
    }

    fn x_far(&self) -> f64 {
        self.x_origin + self.cols as f64 * self.pixel_width
    }

    fn y_far(&self) -> f64 {
        self.y_origin + self.rows as f64 * self.pixel_height
    }
}
