//! Single-band GeoTIFF raster.

use crate::source::check_request;
use crate::{GeoExtent, RasterError, RasterSource, Result};
use std::path::Path;
use tiff::decoder::{Decoder, DecodingResult, Limits};
use tiff::tags::Tag;
use tiff::ColorType;
use tracing::debug;

/// GeoTIFF `ModelPixelScaleTag`.
pub const MODEL_PIXEL_SCALE_TAG: u16 = 33550;
/// GeoTIFF `ModelTiepointTag`.
pub const MODEL_TIEPOINT_TAG: u16 = 33922;
/// GeoTIFF `ModelTransformationTag`.
pub const MODEL_TRANSFORMATION_TAG: u16 = 34264;
/// GDAL no-data tag, stored as an ASCII string.
pub const GDAL_NODATA_TAG: u16 = 42113;

/// A DTM loaded from a single-band GeoTIFF file.
///
/// The whole band is decoded up front; [`RasterSource::read_row`] then hands
/// out copies of individual rows.
#[derive(Debug)]
pub struct GeoTiffRaster {
    /// Elevation data in row-major order (north to south, west to east).
    data: Vec<f64>,
    /// Georeferencing and dimensions.
    extent: GeoExtent,
    /// No-data value declared by the file, if any.
    no_data_value: Option<f64>,
}

impl GeoTiffRaster {
    /// Load a raster from a GeoTIFF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RasterError::FileNotFound(path.to_path_buf()),
            _ => RasterError::Io(e),
        })?;
        let raster = Self::from_reader(std::io::BufReader::new(file))?;
        debug!(
            path = %path.display(),
            rows = raster.extent.rows,
            cols = raster.extent.cols,
            "Loaded GeoTIFF raster"
        );
        Ok(raster)
    }

    /// Load a raster from any seekable GeoTIFF byte stream.
    pub fn from_reader<R: std::io::Read + std::io::Seek>(reader: R) -> Result<Self> {
        let mut decoder = Decoder::new(reader)?;

        // Survey-grade DTMs easily exceed the decoder's default buffer limits
        let mut limits = Limits::default();
        limits.decoding_buffer_size = 1024 * 1024 * 1024; // 1 GB
        limits.intermediate_buffer_size = 1024 * 1024 * 1024; // 1 GB
        limits.ifd_value_size = 1024 * 1024 * 1024;
        decoder = decoder.with_limits(limits);

        match decoder.colortype()? {
            ColorType::Gray(_) => {}
            other => {
                return Err(RasterError::UnsupportedDataType(format!(
                    "expected a single-band raster, found {:?}",
                    other
                )))
            }
        }

        let (width, height) = decoder.dimensions()?;
        let extent = Self::read_geotransform(&mut decoder, width as usize, height as usize)?;
        let data = Self::decode_elevation_data(&mut decoder)?;

        let expected = extent.rows * extent.cols;
        if data.len() != expected {
            return Err(RasterError::DimensionMismatch {
                cols: extent.cols,
                rows: extent.rows,
                expected,
                actual: data.len(),
            });
        }

        let no_data_value = Self::read_nodata_value(&mut decoder);

        Ok(Self {
            data,
            extent,
            no_data_value,
        })
    }

    /// Read the geotransform from GeoTIFF tags.
    ///
    /// Prefers `ModelTiepoint` + `ModelPixelScale` and falls back to
    /// `ModelTransformation`. Rotated or sheared transforms are rejected.
    fn read_geotransform<R: std::io::Read + std::io::Seek>(
        decoder: &mut Decoder<R>,
        cols: usize,
        rows: usize,
    ) -> Result<GeoExtent> {
        let tiepoint = decoder.get_tag_f64_vec(Tag::from_u16_exhaustive(MODEL_TIEPOINT_TAG));
        let pixel_scale = decoder.get_tag_f64_vec(Tag::from_u16_exhaustive(MODEL_PIXEL_SCALE_TAG));

        if let (Ok(tiepoint), Ok(scale)) = (tiepoint, pixel_scale) {
            if tiepoint.len() >= 6 && scale.len() >= 2 {
                // Tiepoint format: [i, j, k, x, y, z] ties pixel (i, j) to geo (x, y)
                let (i, j) = (tiepoint[0], tiepoint[1]);
                let (tie_x, tie_y) = (tiepoint[3], tiepoint[4]);
                let (scale_x, scale_y) = (scale[0], scale[1]);

                return Self::checked_extent(GeoExtent {
                    x_origin: tie_x - i * scale_x,
                    y_origin: tie_y + j * scale_y,
                    pixel_width: scale_x,
                    // Pixel scale is stored positive; rows run southward
                    pixel_height: -scale_y,
                    rows,
                    cols,
                });
            }
        }

        if let Ok(matrix) =
            decoder.get_tag_f64_vec(Tag::from_u16_exhaustive(MODEL_TRANSFORMATION_TAG))
        {
            if matrix.len() >= 8 {
                // Row-major 4x4: x = m0*col + m1*row + m3, y = m4*col + m5*row + m7
                if matrix[1] != 0.0 || matrix[4] != 0.0 {
                    return Err(RasterError::InvalidGeoTiff(
                        "rotated or sheared model transformation is not supported".to_string(),
                    ));
                }
                return Self::checked_extent(GeoExtent {
                    x_origin: matrix[3],
                    y_origin: matrix[7],
                    pixel_width: matrix[0],
                    pixel_height: matrix[5],
                    rows,
                    cols,
                });
            }
        }

        Err(RasterError::InvalidGeoTiff(
            "missing ModelTiepoint/ModelPixelScale or ModelTransformation tags".to_string(),
        ))
    }

    fn checked_extent(extent: GeoExtent) -> Result<GeoExtent> {
        let finite = [
            extent.x_origin,
            extent.y_origin,
            extent.pixel_width,
            extent.pixel_height,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite || extent.pixel_width == 0.0 || extent.pixel_height == 0.0 {
            return Err(RasterError::InvalidGeoTiff(format!(
                "degenerate pixel size ({}, {})",
                extent.pixel_width, extent.pixel_height
            )));
        }
        Ok(extent)
    }

    /// Decode elevation data from the TIFF decoder.
    fn decode_elevation_data<R: std::io::Read + std::io::Seek>(
        decoder: &mut Decoder<R>,
    ) -> Result<Vec<f64>> {
        let result = decoder.read_image()?;

        match result {
            DecodingResult::F32(data) => Ok(data.into_iter().map(f64::from).collect()),
            DecodingResult::F64(data) => Ok(data),
            DecodingResult::I16(data) => Ok(data.into_iter().map(f64::from).collect()),
            DecodingResult::I32(data) => Ok(data.into_iter().map(f64::from).collect()),
            DecodingResult::U16(data) => Ok(data.into_iter().map(f64::from).collect()),
            DecodingResult::U32(data) => Ok(data.into_iter().map(f64::from).collect()),
            DecodingResult::U8(data) => Ok(data.into_iter().map(f64::from).collect()),
            DecodingResult::I8(data) => Ok(data.into_iter().map(f64::from).collect()),
            DecodingResult::U64(data) => Ok(data.into_iter().map(|v| v as f64).collect()),
            DecodingResult::I64(data) => Ok(data.into_iter().map(|v| v as f64).collect()),
        }
    }

    /// Try to read the no-data value from the GDAL_NODATA tag.
    fn read_nodata_value<R: std::io::Read + std::io::Seek>(
        decoder: &mut Decoder<R>,
    ) -> Option<f64> {
        decoder
            .get_tag_ascii_string(Tag::from_u16_exhaustive(GDAL_NODATA_TAG))
            .ok()
            .and_then(|s| s.trim().trim_end_matches('\0').parse().ok())
    }

    /// No-data value declared by the file, if any.
    pub fn no_data_value(&self) -> Option<f64> {
        self.no_data_value
    }

    /// Get the dimensions of this raster as `(cols, rows)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.extent.cols, self.extent.rows)
    }
}

impl RasterSource for GeoTiffRaster {
    fn extent(&self) -> GeoExtent {
        self.extent
    }

    fn read_row(&self, band: usize, row: usize) -> Result<Vec<f64>> {
        check_request(band, row, self.extent.rows)?;
        let start = row * self.extent.cols;
        Ok(self.data[start..start + self.extent.cols].to_vec())
    }
}
