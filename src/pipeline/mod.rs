//! Pipeline module for orchestrating the grid processing stages.
//!
//! Provides a trait-based architecture for modular stages that can be
//! composed into the full raster-to-grid transform.

mod stage;

pub use stage::{
    EnclosureStage, MapStage, Pipeline, PipelineError, SampleStage, SlopeStage, StageId,
};
