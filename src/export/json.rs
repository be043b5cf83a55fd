//! Grid record assembly and JSON serialization.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::biomes::Biome;
use crate::terrain::{MapGrid, Terrain};

/// Errors that can occur during grid export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("grid has no terrain classification")]
    MissingTerrain,
}

/// One output record per grid cell.
///
/// Field names and order are load-bearing for the downstream consumer;
/// `IsBuild`, `ResourceType`, and `IsSettlement` are reserved placeholders
/// populated by later pipeline stages.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GridCell {
    pub height: u16,
    pub terrain: Terrain,
    pub biome: Biome,
    pub is_build: bool,
    pub resource_type: u32,
    pub is_settlement: bool,
    pub environment: u8,
}

/// Merges the sampled grids and the final terrain into output records,
/// row-major (`y` outer, `x` inner).
///
/// Water terrain overrides the reported biome, but environment suitability
/// keeps the value derived from the sampled biome.
pub fn assemble_cells(map: &MapGrid) -> Result<Vec<GridCell>, ExportError> {
    let terrain = map.terrain.as_ref().ok_or(ExportError::MissingTerrain)?;

    let mut cells = Vec::with_capacity(map.len());
    for i in 0..map.len() {
        let sampled = map.biomes[i];
        let cell_terrain = terrain[i];
        let biome = if cell_terrain == Terrain::Water {
            Biome::Water
        } else {
            sampled
        };
        cells.push(GridCell {
            height: map.elevation[i],
            terrain: cell_terrain,
            biome,
            is_build: false,
            resource_type: 0,
            is_settlement: false,
            environment: sampled.environment(),
        });
    }

    Ok(cells)
}

/// Writes the record array as pretty-printed JSON.
pub fn write_grid_json(cells: &[GridCell], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, cells)?;
    writer.flush()?;
    Ok(())
}
