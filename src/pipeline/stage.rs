//! Processing stage trait and pipeline orchestration.

use thiserror::Error;

use crate::raster::{HeightField, MaterialSet};
use crate::sampler::sample_grid;
use crate::terrain::{classify_terrain, resolve_enclosed, ClassifyConfig, MapGrid};

/// Unique identifier for processing stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageId {
    /// Raster sampling into the coarse grid.
    Sampling,
    /// Slope-based terrain classification.
    SlopeClassify,
    /// Enclosed lowland promotion.
    Enclosure,
}

impl StageId {
    /// Returns the name of the stage.
    pub fn name(&self) -> &'static str {
        match self {
            StageId::Sampling => "sampling",
            StageId::SlopeClassify => "slope-classify",
            StageId::Enclosure => "enclosure",
        }
    }
}

/// Errors that can occur during pipeline execution.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Stage '{0}' failed: {1}")]
    StageFailed(String, String),
    #[error("Missing dependency: stage '{0}' requires '{1}'")]
    MissingDependency(String, String),
}

/// Trait for implementing processing stages.
///
/// Each stage transforms the map grid in some way, building upon previous
/// stages.
pub trait MapStage: Send + Sync {
    /// Returns the unique identifier for this stage.
    fn id(&self) -> StageId;

    /// Returns a human-readable name for the stage.
    fn name(&self) -> &str;

    /// Returns the stage IDs that must be executed before this stage.
    fn dependencies(&self) -> &[StageId] {
        &[]
    }

    /// Executes the stage, modifying the grid in place.
    fn execute(&self, map: &mut MapGrid, config: &ClassifyConfig) -> Result<(), PipelineError>;
}

/// Orchestrates the processing stages into a complete transform.
pub struct Pipeline {
    stages: Vec<Box<dyn MapStage>>,
    config: ClassifyConfig,
}

impl Pipeline {
    /// Creates a new empty pipeline with the given configuration.
    pub fn new(config: ClassifyConfig) -> Self {
        Self {
            stages: Vec::new(),
            config,
        }
    }

    /// Adds a stage to the pipeline.
    pub fn add_stage<S: MapStage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Returns the number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Executes all stages in order on the given grid.
    pub fn run(&self, map: &mut MapGrid) -> Result<(), PipelineError> {
        self.run_with_callbacks(map, |_, _, _| {}, |_, _, _| {})
    }

    /// Executes all stages with progress callbacks.
    ///
    /// `on_stage_start` and `on_stage_complete` receive the stage name, its
    /// index, and the stage count.
    pub fn run_with_callbacks<F1, F2>(
        &self,
        map: &mut MapGrid,
        mut on_stage_start: F1,
        mut on_stage_complete: F2,
    ) -> Result<(), PipelineError>
    where
        F1: FnMut(&str, usize, usize),
        F2: FnMut(&str, usize, usize),
    {
        let total = self.stages.len();
        let mut completed: Vec<StageId> = Vec::new();

        for (i, stage) in self.stages.iter().enumerate() {
            on_stage_start(stage.name(), i, total);

            for dep in stage.dependencies() {
                if !completed.contains(dep) {
                    return Err(PipelineError::MissingDependency(
                        stage.name().to_string(),
                        dep.name().to_string(),
                    ));
                }
            }

            stage.execute(map, &self.config)?;
            completed.push(stage.id());

            on_stage_complete(stage.name(), i, total);
        }

        Ok(())
    }
}

/// Raster sampling stage: fills elevation and biomes from the sources.
pub struct SampleStage {
    heightmap: HeightField,
    materials: MaterialSet,
}

impl SampleStage {
    pub fn new(heightmap: HeightField, materials: MaterialSet) -> Self {
        Self {
            heightmap,
            materials,
        }
    }
}

impl MapStage for SampleStage {
    fn id(&self) -> StageId {
        StageId::Sampling
    }

    fn name(&self) -> &str {
        "Raster Sampling"
    }

    fn execute(&self, map: &mut MapGrid, config: &ClassifyConfig) -> Result<(), PipelineError> {
        let last_pixel = map.width.saturating_sub(1) * config.cell_size;
        if last_pixel >= self.heightmap.width() || last_pixel >= self.heightmap.height() {
            return Err(PipelineError::StageFailed(
                self.name().to_string(),
                format!(
                    "sampling extent {}x{} at stride {} exceeds the {}x{} source raster",
                    map.width,
                    map.width,
                    config.cell_size,
                    self.heightmap.width(),
                    self.heightmap.height()
                ),
            ));
        }

        let (elevation, biomes) =
            sample_grid(&self.heightmap, &self.materials, map.width, config.cell_size);
        map.elevation = elevation;
        map.biomes = biomes;
        Ok(())
    }
}

/// Slope classification stage.
pub struct SlopeStage;

impl MapStage for SlopeStage {
    fn id(&self) -> StageId {
        StageId::SlopeClassify
    }

    fn name(&self) -> &str {
        "Slope Classification"
    }

    fn dependencies(&self) -> &[StageId] {
        &[StageId::Sampling]
    }

    fn execute(&self, map: &mut MapGrid, config: &ClassifyConfig) -> Result<(), PipelineError> {
        map.terrain = Some(classify_terrain(map.width, &map.elevation, config));
        Ok(())
    }
}

/// Enclosed lowland promotion stage.
pub struct EnclosureStage;

impl MapStage for EnclosureStage {
    fn id(&self) -> StageId {
        StageId::Enclosure
    }

    fn name(&self) -> &str {
        "Enclosure Resolution"
    }

    fn dependencies(&self) -> &[StageId] {
        &[StageId::SlopeClassify]
    }

    fn execute(&self, map: &mut MapGrid, _config: &ClassifyConfig) -> Result<(), PipelineError> {
        match map.terrain.as_mut() {
            Some(terrain) => {
                resolve_enclosed(map.width, terrain);
                Ok(())
            }
            None => Err(PipelineError::StageFailed(
                self.name().to_string(),
                "terrain grid is not classified yet (run the slope stage first)".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::Terrain;

    fn synthetic_sources(size: u32) -> (HeightField, MaterialSet) {
        // A drowned band along the top rows, flat land elsewhere.
        let samples = (0..size * size)
            .map(|i| if i / size < 2 { 100 } else { 4000 })
            .collect();
        (
            HeightField::from_samples(size, size, samples),
            MaterialSet::new(size, size),
        )
    }

    fn test_config() -> ClassifyConfig {
        ClassifyConfig {
            component_size: 10,
            ..Default::default()
        }
    }

    #[test]
    fn full_pipeline_classifies_the_grid() {
        let (heightmap, materials) = synthetic_sources(10);
        let mut pipeline = Pipeline::new(test_config());
        pipeline.add_stage(SampleStage::new(heightmap, materials));
        pipeline.add_stage(SlopeStage);
        pipeline.add_stage(EnclosureStage);
        assert_eq!(pipeline.stage_count(), 3);

        let mut map = MapGrid::new(5);
        pipeline.run(&mut map).unwrap();

        let terrain = map.terrain.as_ref().unwrap();
        assert_eq!(terrain.len(), 25);
        // Sampled row 0 reads source row 0 (drowned), the rest is land.
        assert!(terrain[..5].iter().all(|&t| t == Terrain::Water));
        assert!(terrain[5..].iter().all(|&t| t != Terrain::Water));
    }

    #[test]
    fn missing_dependency_is_reported() {
        let mut pipeline = Pipeline::new(test_config());
        pipeline.add_stage(EnclosureStage);

        let mut map = MapGrid::new(5);
        let err = pipeline.run(&mut map).unwrap_err();
        assert!(matches!(err, PipelineError::MissingDependency(_, _)));
    }

    #[test]
    fn enclosure_without_terrain_fails() {
        let mut map = MapGrid::new(3);
        let err = EnclosureStage
            .execute(&mut map, &test_config())
            .unwrap_err();
        assert!(matches!(err, PipelineError::StageFailed(_, _)));
    }

    #[test]
    fn oversized_grid_fails_the_sampling_stage() {
        let (heightmap, materials) = synthetic_sources(4);
        let stage = SampleStage::new(heightmap, materials);
        let mut map = MapGrid::new(100);
        let err = stage.execute(&mut map, &test_config()).unwrap_err();
        assert!(matches!(err, PipelineError::StageFailed(_, _)));
    }

    #[test]
    fn callbacks_fire_for_every_stage() {
        let (heightmap, materials) = synthetic_sources(10);
        let mut pipeline = Pipeline::new(test_config());
        pipeline.add_stage(SampleStage::new(heightmap, materials));
        pipeline.add_stage(SlopeStage);

        let mut map = MapGrid::new(5);
        let mut started = Vec::new();
        let mut finished = Vec::new();
        pipeline
            .run_with_callbacks(
                &mut map,
                |name, i, total| started.push((name.to_string(), i, total)),
                |name, i, total| finished.push((name.to_string(), i, total)),
            )
            .unwrap();

        assert_eq!(started.len(), 2);
        assert_eq!(finished.len(), 2);
        assert_eq!(started[0], ("Raster Sampling".to_string(), 0, 2));
        assert_eq!(finished[1], ("Slope Classification".to_string(), 1, 2));
    }
}
