//! Terrain raster to simulation grid converter.
//!
//! This crate converts a 16-bit elevation raster and a set of per-biome
//! weight masks into a coarse simulation grid: each cell carries a sampled
//! height, a slope-classified terrain category (with landlocked lowland
//! pockets folded into the surrounding highland), a biome, and an
//! environment-suitability value for the downstream map generator.

pub mod biomes;
pub mod export;
pub mod pipeline;
pub mod raster;
pub mod sampler;
pub mod terrain;

pub use biomes::Biome;
pub use export::{assemble_cells, write_grid_json, ExportError, GridCell};
pub use pipeline::{
    EnclosureStage, MapStage, Pipeline, PipelineError, SampleStage, SlopeStage, StageId,
};
pub use raster::{HeightField, MaterialSet, RasterError};
pub use terrain::{
    classify_terrain, resolve_enclosed, ClassifyConfig, ConfigError, MapGrid, Terrain,
};
