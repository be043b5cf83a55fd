//! Slope-based terrain classification.

use rayon::prelude::*;

use super::config::ClassifyConfig;
use super::Terrain;

/// Classifies every cell of an elevation grid by its steepest slope to any
/// of the up to 8 grid-adjacent neighbors.
///
/// Cells at or below sea level are water and skip the slope computation
/// entirely. Neighbors outside the grid are excluded from the maximum, so
/// border cells see fewer comparisons; that asymmetry is intentional and
/// must be preserved.
///
/// Pure function of `(elevation, config)`: identical inputs yield an
/// identical grid regardless of evaluation order.
pub fn classify_terrain(width: u32, elevation: &[u16], config: &ClassifyConfig) -> Vec<Terrain> {
    let w = width as usize;
    assert_eq!(elevation.len(), w * w, "elevation grid must be {w}x{w}");

    (0..w * w)
        .into_par_iter()
        .map(|i| classify_cell(i % w, i / w, w, elevation, config))
        .collect()
}

fn classify_cell(
    x: usize,
    y: usize,
    width: usize,
    elevation: &[u16],
    config: &ClassifyConfig,
) -> Terrain {
    let height = elevation[y * width + x] as i32;
    if height <= config.sea_level {
        return Terrain::Water;
    }

    // World-space stride between adjacent cells.
    let step = config.cell_size as f32 * config.grid_size;
    let mut max_slope = 0.0f32;

    for oy in -1i32..=1 {
        for ox in -1i32..=1 {
            if ox == 0 && oy == 0 {
                continue;
            }
            let nx = x as i32 + ox;
            let ny = y as i32 + oy;
            if nx < 0 || ny < 0 || nx >= width as i32 || ny >= width as i32 {
                continue;
            }

            let neighbor = elevation[ny as usize * width + nx as usize] as i32;
            let dx = ox as f32 * step;
            let dy = oy as f32 * step;
            let distance = (dx * dx + dy * dy).sqrt();
            let slope = (neighbor - height).abs() as f32 / distance;
            if slope > max_slope {
                max_slope = slope;
            }
        }
    }

    if max_slope <= config.plain_threshold {
        Terrain::Plain
    } else if max_slope <= config.hill_threshold {
        Terrain::Hill
    } else {
        Terrain::Mountain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClassifyConfig {
        // cell_size 2 * grid_size 100 -> cardinal neighbor distance 200.
        ClassifyConfig {
            sea_level: 0,
            ..Default::default()
        }
    }

    #[test]
    fn flat_interior_classifies_plain() {
        let elevation = vec![100u16; 25];
        let terrain = classify_terrain(5, &elevation, &config());
        assert!(terrain.iter().all(|&t| t == Terrain::Plain));
    }

    #[test]
    fn cells_at_or_below_sea_level_are_water() {
        let config = ClassifyConfig {
            sea_level: 100,
            ..Default::default()
        };
        // One drowned cell next to a cliff; the water cell never computes slope.
        let elevation = vec![100, 5000, 5000, 5000];
        let terrain = classify_terrain(2, &elevation, &config);
        assert_eq!(terrain[0], Terrain::Water);
        assert_eq!(terrain[1], Terrain::Mountain);
    }

    #[test]
    fn plain_threshold_is_inclusive() {
        // Height difference 60 over distance 200 -> slope exactly 0.30.
        let elevation = vec![100, 160, 100, 160];
        let terrain = classify_terrain(2, &elevation, &config());
        assert!(terrain.iter().all(|&t| t == Terrain::Plain));
    }

    #[test]
    fn hill_threshold_is_inclusive() {
        // Height difference 150 over distance 200 -> slope exactly 0.75.
        let elevation = vec![100, 250, 100, 250];
        let terrain = classify_terrain(2, &elevation, &config());
        assert!(terrain.iter().all(|&t| t == Terrain::Hill));
    }

    #[test]
    fn steeper_than_hill_threshold_is_mountain() {
        let elevation = vec![100, 300, 100, 300];
        let terrain = classify_terrain(2, &elevation, &config());
        assert!(terrain.iter().all(|&t| t == Terrain::Mountain));
    }

    #[test]
    fn single_cell_grid_has_no_neighbors_and_is_plain() {
        let terrain = classify_terrain(1, &[500], &config());
        assert_eq!(terrain, vec![Terrain::Plain]);
    }

    #[test]
    fn missing_border_neighbors_are_excluded_from_the_maximum() {
        // The steep pair sits in the far column; the left column only ever
        // compares against its flat right-hand neighbors.
        let elevation = vec![
            100, 100, 100, //
            100, 100, 400, //
            100, 100, 100,
        ];
        let terrain = classify_terrain(3, &elevation, &config());
        assert_eq!(terrain[3], Terrain::Plain);
        assert_eq!(terrain[5], Terrain::Mountain);
    }

    #[test]
    fn classification_is_deterministic() {
        let elevation: Vec<u16> = (0..64).map(|i| ((i * 31) % 997) as u16 * 7).collect();
        let first = classify_terrain(8, &elevation, &config());
        let second = classify_terrain(8, &elevation, &config());
        assert_eq!(first, second);
    }
}
