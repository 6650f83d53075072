use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;

pub const DATASET_VERSION: &str = "1.0";

/// One geocoded stadium. Keyed by its cleaned name in the league map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueRecord {
    pub location: String,
    pub team: String,
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub last_verified: DateTime<Local>,
}

/// Venues of one league, by name. Later inserts of the same name win.
pub type LeagueVenues = BTreeMap<String, VenueRecord>;

#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    pub last_updated: DateTime<Local>,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub metadata: Metadata,
    #[serde(flatten)]
    pub leagues: BTreeMap<String, LeagueVenues>,
}

impl Dataset {
    /// Empty dataset with one (empty) map per league key.
    pub fn new<'a>(keys: impl IntoIterator<Item = &'a str>, started: DateTime<Local>) -> Self {
        Dataset {
            metadata: Metadata {
                last_updated: started,
                version: DATASET_VERSION.to_string(),
            },
            leagues: keys
                .into_iter()
                .map(|k| (k.to_string(), LeagueVenues::new()))
                .collect(),
        }
    }

    pub fn merge(&mut self, key: &str, venues: LeagueVenues) {
        self.leagues.entry(key.to_string()).or_default().extend(venues);
    }

    pub fn league(&self, key: &str) -> Option<&LeagueVenues> {
        self.leagues.get(key)
    }

    pub fn count(&self, key: &str) -> usize {
        self.league(key).map_or(0, |l| l.len())
    }
}

/// Pretty-print the dataset as JSON with four-space indentation.
pub fn to_json(dataset: &Dataset) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    dataset
        .serialize(&mut ser)
        .context("Failed to serialize dataset")?;
    String::from_utf8(buf).context("Dataset JSON was not UTF-8")
}

/// Write the dataset to `path` as UTF-8 JSON, creating parent directories.
pub fn save(dataset: &Dataset, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    }
    let json = to_json(dataset)?;
    fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fenway() -> VenueRecord {
        VenueRecord {
            location: "Boston Massachusetts".into(),
            team: "Boston Red Sox".into(),
            latitude: 42.3467,
            longitude: -71.0972,
            display_name: "Fenway Park, Boston".into(),
            kind: "stadium".into(),
            last_verified: Local::now(),
        }
    }

    #[test]
    fn json_shape() {
        let mut ds = Dataset::new(["mlb", "mls"], Local::now());
        ds.merge("mlb", LeagueVenues::from([("Fenway Park".to_string(), fenway())]));

        let v: serde_json::Value = serde_json::from_str(&to_json(&ds).unwrap()).unwrap();
        assert_eq!(v["metadata"]["version"], "1.0");
        assert!(v["metadata"]["last_updated"].is_string());
        assert_eq!(v["mls"], serde_json::json!({}));

        let rec = &v["mlb"]["Fenway Park"];
        assert_eq!(rec["location"], "Boston Massachusetts");
        assert_eq!(rec["latitude"], 42.3467);
        assert_eq!(rec["type"], "stadium");
        assert!(rec["last_verified"].is_string());
        assert!(rec.get("kind").is_none());
    }

    #[test]
    fn four_space_indent() {
        let ds = Dataset::new(["nfl"], Local::now());
        let json = to_json(&ds).unwrap();
        assert!(json.contains("\n    \"metadata\": {\n        \"last_updated\""));
    }

    #[test]
    fn merge_is_last_write_wins() {
        let mut ds = Dataset::new(["mlb"], Local::now());
        let mut moved = fenway();
        moved.team = "Someone Else".into();
        ds.merge("mlb", LeagueVenues::from([("Fenway Park".to_string(), fenway())]));
        ds.merge("mlb", LeagueVenues::from([("Fenway Park".to_string(), moved)]));
        assert_eq!(ds.count("mlb"), 1);
        assert_eq!(ds.league("mlb").unwrap()["Fenway Park"].team, "Someone Else");
        assert_eq!(ds.count("nfl"), 0);
    }

    #[test]
    fn save_writes_file() {
        let dir = std::env::temp_dir().join(format!("stadium_coords_save_{}", std::process::id()));
        let path = dir.join("out.json");
        let ds = Dataset::new(["nfl", "ncaa"], Local::now());

        save(&ds, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"ncaa\": {}"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
