use serde::Serialize;

use crate::{app::settings::TerrainSettings, heightmap::HeightMap};

/// Machine-readable view of one heightmap, printed by `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct HeightMapReport {
    pub settings: TerrainSettings,
    pub ceiling: i32,
    pub wall_variance: i32,
    pub apex: i32,
    pub nadir: i32,
    pub heights: Vec<i32>,
    pub non_negative_heights: Vec<i32>,
    pub rows: Vec<String>,
}

impl HeightMapReport {
    #[must_use]
    pub fn new(settings: TerrainSettings, map: &HeightMap) -> Self {
        Self {
            settings,
            ceiling: map.ceiling(),
            wall_variance: map.wall_variance(),
            apex: map.highest_point(),
            nadir: map.lowest_point(),
            heights: map.height_values().to_vec(),
            non_negative_heights: map.non_negative_heights().to_vec(),
            rows: map.rows(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::terrain::TileStyle;

    #[test]
    fn report_carries_heights_and_rows() {
        let map = HeightMap::from_heights(vec![0, -1, 1], None, TileStyle::default()).unwrap();
        let report = HeightMapReport::new(TerrainSettings::default(), &map);
        let payload = serde_json::to_value(&report).unwrap();

        assert_eq!(payload["ceiling"], 3);
        assert_eq!(payload["wall_variance"], 1);
        assert_eq!(payload["apex"], 3);
        assert_eq!(payload["nadir"], -1);
        assert_eq!(payload["heights"], serde_json::json!([0, -1, 1, 3]));
        assert_eq!(payload["non_negative_heights"], serde_json::json!([1, 0, 2, 3]));
        assert_eq!(payload["rows"].as_array().map(Vec::len), Some(3));
        assert_eq!(payload["settings"]["length"], 40);
    }
}
