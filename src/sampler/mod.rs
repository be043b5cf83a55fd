//! Grid sampling from source rasters.

use crate::biomes::Biome;
use crate::raster::{HeightField, MaterialSet, MATERIAL_LAYER_COUNT};
use crate::terrain::{ClassifyConfig, ConfigError};

/// Computes the output grid side length: `component_size / cell_size`,
/// clamped so sampling never reads outside the source raster.
pub fn grid_width(
    config: &ClassifyConfig,
    raster_width: u32,
    raster_height: u32,
) -> Result<u32, ConfigError> {
    if config.cell_size == 0 {
        return Err(ConfigError::ZeroCellSize);
    }
    let width = (config.component_size / config.cell_size)
        .min(raster_width / config.cell_size)
        .min(raster_height / config.cell_size);
    if width == 0 {
        return Err(ConfigError::EmptyGrid {
            component_size: config.component_size,
            cell_size: config.cell_size,
            raster_width,
            raster_height,
        });
    }
    Ok(width)
}

/// Samples an elevation value and a biome per grid cell, reading the
/// top-left source pixel of each cell at stride `cell_size`.
///
/// Returns row-major vectors of length `width * width`.
pub fn sample_grid(
    heights: &HeightField,
    materials: &MaterialSet,
    width: u32,
    cell_size: u32,
) -> (Vec<u16>, Vec<Biome>) {
    let len = (width as usize) * (width as usize);
    let mut elevation = Vec::with_capacity(len);
    let mut biomes = Vec::with_capacity(len);

    for y in 0..width {
        for x in 0..width {
            let px = x * cell_size;
            let py = y * cell_size;
            elevation.push(heights.sample(px, py));
            biomes.push(dominant_biome(materials, px, py));
        }
    }

    (elevation, biomes)
}

/// Argmax over the weight layers in ascending id order. The strict `>`
/// against the running maximum keeps the first id that reaches it, and
/// all-zero weights leave the cell without a material sample.
fn dominant_biome(materials: &MaterialSet, x: u32, y: u32) -> Biome {
    let mut max_weight = 0u8;
    let mut biome = Biome::None;

    for id in 0..MATERIAL_LAYER_COUNT as u8 {
        let weight = materials.weight(id, x, y);
        if weight > max_weight {
            max_weight = weight;
            biome = Biome::from_id(id).unwrap_or(Biome::None);
        }
    }

    biome
}
