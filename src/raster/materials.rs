//! Biome weight mask loading.

use std::path::Path;

use super::RasterError;

/// Number of addressable weight layers; material ids run `0..=16`.
pub const MATERIAL_LAYER_COUNT: usize = 17;

/// Sparse set of per-biome weight masks sharing the elevation raster's
/// pixel space. Absent layers weigh zero everywhere.
#[derive(Debug, Clone)]
pub struct MaterialSet {
    width: u32,
    height: u32,
    layers: [Option<Vec<u8>>; MATERIAL_LAYER_COUNT],
}

impl MaterialSet {
    /// Creates an empty set for the given pixel space.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            layers: std::array::from_fn(|_| None),
        }
    }

    /// Loads every `<id>.png` weight mask from `dir`.
    ///
    /// Masks are matched by decimal file stem; ids outside `0..=16` and
    /// files with other names are skipped. Every accepted mask must match
    /// the elevation raster's dimensions.
    pub fn load(dir: &Path, width: u32, height: u32) -> Result<Self, RasterError> {
        let mut set = Self::new(width, height);

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let Some(id) = material_id(&path) else {
                continue;
            };

            let img = image::open(&path)?;
            if img.width() != width || img.height() != height {
                return Err(RasterError::DimensionMismatch {
                    path: path.display().to_string(),
                    got_width: img.width(),
                    got_height: img.height(),
                    want_width: width,
                    want_height: height,
                });
            }

            // The R channel carries the weight; grayscale masks replicate
            // their value into R.
            let weights = img.to_rgba8().pixels().map(|p| p.0[0]).collect();
            set.set_layer(id, weights)?;
        }

        Ok(set)
    }

    /// Installs a weight layer, row-major, length `width * height`.
    pub fn set_layer(&mut self, id: u8, weights: Vec<u8>) -> Result<(), RasterError> {
        let expected = (self.width as usize) * (self.height as usize);
        if weights.len() != expected {
            return Err(RasterError::BadLayerLength {
                got: weights.len(),
                expected,
            });
        }
        self.layers[id as usize] = Some(weights);
        Ok(())
    }

    /// Number of layers present.
    pub fn layer_count(&self) -> usize {
        self.layers.iter().filter(|l| l.is_some()).count()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Weight of material `id` at pixel `(x, y)`; 0 when the layer is absent.
    pub fn weight(&self, id: u8, x: u32, y: u32) -> u8 {
        match self.layers.get(id as usize).and_then(|l| l.as_ref()) {
            Some(layer) => layer[(y * self.width + x) as usize],
            None => 0,
        }
    }
}

/// Weight masks are named `<id>.png` with a decimal id below
/// [`MATERIAL_LAYER_COUNT`]; anything else is not a mask.
fn material_id(path: &Path) -> Option<u8> {
    let ext = path.extension()?.to_str()?;
    if !ext.eq_ignore_ascii_case("png") {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let id: u8 = stem.parse().ok()?;
    ((id as usize) < MATERIAL_LAYER_COUNT).then_some(id)
}
