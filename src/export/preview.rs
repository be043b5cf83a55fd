//! Terrain preview rendering.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::terrain::Terrain;

/// Errors that can occur during preview export.
#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("terrain data length {got} != expected {expected}")]
    BadLength { got: usize, expected: usize },
}

/// Writes the terrain grid as an RGB PNG, one pixel per cell.
///
/// `terrain` must be length `width * width` in row-major order.
pub fn export_terrain_preview(
    width: u32,
    terrain: &[Terrain],
    path: &Path,
) -> Result<(), PreviewError> {
    let expected = (width as usize) * (width as usize);
    if terrain.len() != expected {
        return Err(PreviewError::BadLength {
            got: terrain.len(),
            expected,
        });
    }

    let mut rgb = Vec::with_capacity(expected * 3);
    for &t in terrain {
        rgb.extend_from_slice(&t.preview_rgb());
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Default, FilterType::Adaptive);
    encoder.write_image(&rgb, width, width, ExtendedColorType::Rgb8)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn preview_pixels_use_the_terrain_palette() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preview.png");
        let terrain = vec![
            Terrain::Water,
            Terrain::Plain,
            Terrain::Hill,
            Terrain::Mountain,
        ];
        export_terrain_preview(2, &terrain, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(0, 0).0, [30, 64, 175]);
        assert_eq!(img.get_pixel(1, 0).0, [86, 152, 59]);
        assert_eq!(img.get_pixel(0, 1).0, [140, 120, 80]);
        assert_eq!(img.get_pixel(1, 1).0, [100, 100, 100]);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preview.png");
        let result = export_terrain_preview(3, &[Terrain::Plain; 4], &path);
        assert!(matches!(result, Err(PreviewError::BadLength { .. })));
        assert!(!path.exists());
    }
}
