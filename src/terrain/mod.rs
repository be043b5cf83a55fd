//! Terrain categories and the two classification passes.
//!
//! `classify_terrain` maps an elevation grid into terrain categories from
//! local slope; `resolve_enclosed` then promotes landlocked lowland pockets
//! to mountain.

mod config;
mod enclosure;
mod map;
mod slope;

pub use config::{ClassifyConfig, ConfigError};
pub use enclosure::resolve_enclosed;
pub use map::MapGrid;
pub use slope::classify_terrain;

use serde::{Serialize, Serializer};

/// Terrain category code. `as_u8()` is stable and used for storage/export.
///
/// Only `Plain`, `Hill`, `Water`, `Mountain`, and `None` are ever produced
/// here; `Build`, `Road`, and `Bridge` are written by later pipeline stages
/// and round-trip through the schema untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    Plain = 0,
    Hill = 1,
    Water = 2,
    Mountain = 3,
    Build = 4,
    Road = 5,
    Bridge = 6,
    None = 7,
}

impl Terrain {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Plain and hill form the "lowland" class for enclosure analysis.
    pub fn is_lowland(self) -> bool {
        matches!(self, Terrain::Plain | Terrain::Hill)
    }

    /// RGB preview color for this terrain category.
    pub fn preview_rgb(self) -> [u8; 3] {
        match self {
            Terrain::Water => [30, 64, 175],
            Terrain::Plain => [86, 152, 59],
            Terrain::Hill => [140, 120, 80],
            Terrain::Mountain => [100, 100, 100],
            _ => [0, 0, 0],
        }
    }
}

impl Serialize for Terrain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_codes_are_stable() {
        assert_eq!(Terrain::Plain.as_u8(), 0);
        assert_eq!(Terrain::Hill.as_u8(), 1);
        assert_eq!(Terrain::Water.as_u8(), 2);
        assert_eq!(Terrain::Mountain.as_u8(), 3);
        assert_eq!(Terrain::Build.as_u8(), 4);
        assert_eq!(Terrain::Road.as_u8(), 5);
        assert_eq!(Terrain::Bridge.as_u8(), 6);
        assert_eq!(Terrain::None.as_u8(), 7);
    }

    #[test]
    fn terrain_serializes_as_code() {
        let v = serde_json::to_value(Terrain::Mountain).unwrap();
        assert_eq!(v, serde_json::json!(3));
    }

    #[test]
    fn only_plain_and_hill_are_lowland() {
        assert!(Terrain::Plain.is_lowland());
        assert!(Terrain::Hill.is_lowland());
        assert!(!Terrain::Water.is_lowland());
        assert!(!Terrain::Mountain.is_lowland());
        assert!(!Terrain::None.is_lowland());
    }
}
