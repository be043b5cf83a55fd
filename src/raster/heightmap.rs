//! 16-bit elevation raster decoding.

use std::path::Path;

use image::DynamicImage;

use super::RasterError;

/// Decoded elevation raster with one unsigned 16-bit sample per pixel.
#[derive(Debug, Clone)]
pub struct HeightField {
    width: u32,
    height: u32,
    samples: Vec<u16>,
}

impl HeightField {
    /// Loads and decodes an elevation raster from disk.
    pub fn load(path: &Path) -> Result<Self, RasterError> {
        let img = image::open(path)?;
        Self::from_image(img)
    }

    /// Decodes an already-opened image.
    ///
    /// RGB(A) rasters pack the sample as low byte in R, high byte in G;
    /// 16-bit grayscale is taken verbatim and 8-bit grayscale widens.
    /// Anything else is rejected rather than guessed at.
    pub fn from_image(img: DynamicImage) -> Result<Self, RasterError> {
        let (width, height) = (img.width(), img.height());
        let samples = match img {
            DynamicImage::ImageLuma16(buf) => buf.into_raw(),
            DynamicImage::ImageLumaA16(buf) => buf.pixels().map(|p| p.0[0]).collect(),
            DynamicImage::ImageLuma8(buf) => buf.pixels().map(|p| p.0[0] as u16).collect(),
            DynamicImage::ImageRgb8(buf) => buf.pixels().map(|p| pack16(p.0[0], p.0[1])).collect(),
            DynamicImage::ImageRgba8(buf) => buf.pixels().map(|p| pack16(p.0[0], p.0[1])).collect(),
            other => return Err(RasterError::UnsupportedFormat(other.color())),
        };
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Builds a field from raw samples, row-major.
    pub fn from_samples(width: u32, height: u32, samples: Vec<u16>) -> Self {
        assert_eq!(samples.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Elevation sample at pixel `(x, y)`.
    pub fn sample(&self, x: u32, y: u32) -> u16 {
        self.samples[(y * self.width + x) as usize]
    }
}

// Low byte in R, high byte in G.
fn pack16(r: u8, g: u8) -> u16 {
    ((g as u16) << 8) | r as u16
}
