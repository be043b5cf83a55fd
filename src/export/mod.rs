//! Output assembly and serialization.

mod json;
mod preview;

pub use json::{assemble_cells, write_grid_json, ExportError, GridCell};
pub use preview::{export_terrain_preview, PreviewError};
