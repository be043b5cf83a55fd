//! Gridgen CLI - terrain raster to simulation grid converter.
//!
//! Samples an elevation heightmap and per-biome weight masks into a coarse
//! grid, classifies terrain by slope, folds enclosed lowland pockets into
//! mountains, and writes the grid records as JSON.

use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use gridgen::export::{assemble_cells, export_terrain_preview, write_grid_json};
use gridgen::pipeline::{EnclosureStage, Pipeline, SampleStage, SlopeStage};
use gridgen::raster::{HeightField, MaterialSet};
use gridgen::sampler::grid_width;
use gridgen::terrain::{ClassifyConfig, MapGrid};

/// Convert terrain source rasters into a simulation grid.
#[derive(Parser)]
#[command(name = "gridgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 16-bit elevation heightmap PNG.
    #[arg(long)]
    heightmap: PathBuf,

    /// Directory of per-biome weight masks named `<id>.png`.
    #[arg(long)]
    materials: PathBuf,

    /// Output path for the grid JSON.
    #[arg(short, long)]
    output: PathBuf,

    /// Elevation at or below which a cell is water.
    #[arg(long, default_value = "3550")]
    sea_level: i32,

    /// Maximum slope ratio classified as plain.
    #[arg(long, default_value = "0.30")]
    plain_threshold: f32,

    /// Maximum slope ratio classified as hill; steeper cells become mountain.
    #[arg(long, default_value = "0.75")]
    hill_threshold: f32,

    /// Source pixels per grid cell.
    #[arg(long, default_value = "2")]
    cell_size: u32,

    /// Target grid footprint in source pixels.
    #[arg(long, default_value = "510")]
    component_size: u32,

    /// World units per grid cell.
    #[arg(long, default_value = "100.0")]
    grid_size: f32,

    /// Optional terrain preview PNG path.
    #[arg(long)]
    preview: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let config = ClassifyConfig {
        sea_level: cli.sea_level,
        plain_threshold: cli.plain_threshold,
        hill_threshold: cli.hill_threshold,
        cell_size: cli.cell_size,
        grid_size: cli.grid_size,
        component_size: cli.component_size,
    };
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("Gridgen - Terrain Grid Converter");
    println!("================================");

    let start = Instant::now();

    println!("Loading heightmap: {}", cli.heightmap.display());
    let heightmap = HeightField::load(&cli.heightmap).unwrap_or_else(|e| {
        eprintln!("Error loading heightmap: {}", e);
        std::process::exit(1);
    });
    println!("  Source raster: {}x{}", heightmap.width(), heightmap.height());

    println!("Loading material masks: {}", cli.materials.display());
    let materials = MaterialSet::load(&cli.materials, heightmap.width(), heightmap.height())
        .unwrap_or_else(|e| {
            eprintln!("Error loading material masks: {}", e);
            std::process::exit(1);
        });
    println!("  Loaded {} weight layers", materials.layer_count());

    let width = grid_width(&config, heightmap.width(), heightmap.height()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    println!("Grid: {}x{} cells at stride {}", width, width, config.cell_size);

    let mut map = MapGrid::new(width);
    let mut pipeline = Pipeline::new(config);
    pipeline.add_stage(SampleStage::new(heightmap, materials));
    pipeline.add_stage(SlopeStage);
    pipeline.add_stage(EnclosureStage);

    println!("\nRunning processing pipeline...");
    pipeline
        .run_with_callbacks(
            &mut map,
            |name, i, total| {
                println!("  [{}/{}] Starting: {}", i + 1, total, name);
            },
            |name, i, total| {
                println!("  [{}/{}] Completed: {}", i + 1, total, name);
            },
        )
        .unwrap_or_else(|e| {
            eprintln!("Error during processing: {}", e);
            std::process::exit(1);
        });

    let cells = assemble_cells(&map).unwrap_or_else(|e| {
        eprintln!("Error assembling grid records: {}", e);
        std::process::exit(1);
    });

    println!("\nWriting {} grid records: {}", cells.len(), cli.output.display());
    write_grid_json(&cells, &cli.output).unwrap_or_else(|e| {
        eprintln!("Error writing grid JSON: {}", e);
        std::process::exit(1);
    });

    if let Some(preview_path) = &cli.preview {
        if let Some(terrain) = map.terrain.as_deref() {
            export_terrain_preview(width, terrain, preview_path).unwrap_or_else(|e| {
                eprintln!("Error writing preview: {}", e);
                std::process::exit(1);
            });
            println!("Wrote terrain preview: {}", preview_path.display());
        }
    }

    println!("\nTotal time: {:.2?}", start.elapsed());
    println!("Done!");
}
