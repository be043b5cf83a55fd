//! Biome identifiers and the environment-suitability lookup.

use serde::{Serialize, Serializer};

/// Biome classification ID. `as_u8()` is stable and used for storage/export.
///
/// `Water` (14) marks open water; `None` (17) means no material sample was
/// present at the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Biome {
    TemperateSavanna = 0,
    TemperateForest = 1,
    BorealTundra = 2,
    BorealForest = 3,
    BorealSavanna = 4,
    TropicalRainforest = 5,
    Iceland = 6,
    Gobi = 7,
    Desert = 8,
    Rocky = 9,
    Saline = 10,
    Wasteland = 11,
    Wetland = 12,
    DeadZones = 13,
    Water = 14,
    Road = 15,
    Soil = 16,
    None = 17,
}

impl Biome {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Maps a stored biome code back to its variant.
    pub fn from_id(id: u8) -> Option<Biome> {
        match id {
            0 => Some(Biome::TemperateSavanna),
            1 => Some(Biome::TemperateForest),
            2 => Some(Biome::BorealTundra),
            3 => Some(Biome::BorealForest),
            4 => Some(Biome::BorealSavanna),
            5 => Some(Biome::TropicalRainforest),
            6 => Some(Biome::Iceland),
            7 => Some(Biome::Gobi),
            8 => Some(Biome::Desert),
            9 => Some(Biome::Rocky),
            10 => Some(Biome::Saline),
            11 => Some(Biome::Wasteland),
            12 => Some(Biome::Wetland),
            13 => Some(Biome::DeadZones),
            14 => Some(Biome::Water),
            15 => Some(Biome::Road),
            16 => Some(Biome::Soil),
            17 => Some(Biome::None),
            _ => Option::None,
        }
    }

    /// Environment suitability category (0..8) for this biome.
    ///
    /// Biomes absent from the suitability table (`Road`, `None`) default
    /// to 0; that gap is a documented degrade, not an error.
    pub fn environment(self) -> u8 {
        match self {
            Biome::TemperateSavanna => 7,
            Biome::TemperateForest => 7,
            Biome::BorealTundra => 3,
            Biome::BorealForest => 5,
            Biome::BorealSavanna => 4,
            Biome::TropicalRainforest => 7,
            Biome::Iceland => 0,
            Biome::Gobi => 3,
            Biome::Desert => 0,
            Biome::Rocky => 1,
            Biome::Saline => 0,
            Biome::Wasteland => 3,
            Biome::Wetland => 6,
            Biome::DeadZones => 2,
            Biome::Water => 3,
            Biome::Soil => 7,
            Biome::Road | Biome::None => 0,
        }
    }
}

impl Serialize for Biome {
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
    fn ids_round_trip() {
        for id in 0..=17u8 {
            let biome = Biome::from_id(id).unwrap();
            assert_eq!(biome.as_u8(), id);
        }
        assert_eq!(Biome::from_id(18), Option::None);
    }

    #[test]
    fn water_and_none_sentinels() {
        assert_eq!(Biome::Water.as_u8(), 14);
        assert_eq!(Biome::None.as_u8(), 17);
    }

    #[test]
    fn environment_table_matches_the_consumer() {
        assert_eq!(Biome::TemperateSavanna.environment(), 7);
        assert_eq!(Biome::BorealTundra.environment(), 3);
        assert_eq!(Biome::Wetland.environment(), 6);
        assert_eq!(Biome::DeadZones.environment(), 2);
        assert_eq!(Biome::Water.environment(), 3);
        assert_eq!(Biome::Soil.environment(), 7);
    }

    #[test]
    fn table_gaps_default_to_zero() {
        assert_eq!(Biome::Road.environment(), 0);
        assert_eq!(Biome::None.environment(), 0);
    }

    #[test]
    fn biome_serializes_as_code() {
        let v = serde_json::to_value(Biome::Wetland).unwrap();
        assert_eq!(v, serde_json::json!(12));
    }
}
