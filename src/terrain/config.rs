//! Classification configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by configuration validation, before any classification runs.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("hill threshold ({hill}) must exceed plain threshold ({plain})")]
    ThresholdOrder { plain: f32, hill: f32 },
    #[error("cell size must be positive")]
    ZeroCellSize,
    #[error("grid size must be positive, got {0}")]
    NonPositiveGridSize(f32),
    #[error(
        "computed grid is empty (component size {component_size}, cell size {cell_size}, \
         source raster {raster_width}x{raster_height})"
    )]
    EmptyGrid {
        component_size: u32,
        cell_size: u32,
        raster_width: u32,
        raster_height: u32,
    },
}

/// Parameters for sampling and terrain classification. Immutable for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyConfig {
    /// Elevation at or below which a cell is water.
    pub sea_level: i32,
    /// Maximum slope ratio classified as plain (inclusive).
    pub plain_threshold: f32,
    /// Maximum slope ratio classified as hill (inclusive); steeper is mountain.
    pub hill_threshold: f32,
    /// Source pixels per grid cell (sampling stride).
    pub cell_size: u32,
    /// World units per grid cell, used for slope distances.
    pub grid_size: f32,
    /// Target grid footprint in source pixels; the grid side is
    /// `component_size / cell_size`, clamped to the source raster.
    pub component_size: u32,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            sea_level: 3550,
            plain_threshold: 0.30,
            hill_threshold: 0.75,
            cell_size: 2,
            grid_size: 100.0,
            component_size: 510,
        }
    }
}

impl ClassifyConfig {
    /// Checks the parameter invariants; classification must not run on a
    /// configuration that fails here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.grid_size <= 0.0 {
            return Err(ConfigError::NonPositiveGridSize(self.grid_size));
        }
        if self.hill_threshold <= self.plain_threshold {
            return Err(ConfigError::ThresholdOrder {
                plain: self.plain_threshold,
                hill: self.hill_threshold,
            });
        }
        Ok(())
    }
}
