//! Source raster loading: the elevation field and the biome weight masks.

mod heightmap;
mod materials;

pub use heightmap::HeightField;
pub use materials::{MaterialSet, MATERIAL_LAYER_COUNT};

use thiserror::Error;

/// Errors that can occur while loading source rasters. All of them are
/// fatal: no partial output is ever produced from a bad source.
#[derive(Error, Debug)]
pub enum RasterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("unsupported pixel layout {0:?} for an elevation raster")]
    UnsupportedFormat(image::ColorType),
    #[error("weight mask '{path}' is {got_width}x{got_height}, expected {want_width}x{want_height}")]
    DimensionMismatch {
        path: String,
        got_width: u32,
        got_height: u32,
        want_width: u32,
        want_height: u32,
    },
    #[error("weight layer has {got} samples, expected {expected}")]
    BadLayerLength { got: usize, expected: usize },
}
