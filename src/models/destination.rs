//! Destination model and its ranked view

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A country-level travel destination as persisted in `destinations.json`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Destination {
    pub id: String,
    pub name: String,
    /// Capital city, `"Unknown"` when the source had none
    #[serde(default = "default_capital")]
    pub capital: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub currencies: Vec<String>,
    /// Flag image URL
    #[serde(default)]
    pub flag: String,
    /// `[latitude, longitude]` in decimal degrees
    #[serde(default)]
    pub coordinates: Vec<f64>,
    /// UTC offsets such as `"UTC+01:00"`
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default, with = "super::timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "super::timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_capital() -> String {
    "Unknown".to_string()
}

impl Destination {
    /// Latitude/longitude pair, if the record carries both
    #[must_use]
    pub fn lat_lon(&self) -> Option<(f64, f64)> {
        match self.coordinates.as_slice() {
            [lat, lon, ..] => Some((*lat, *lon)),
            _ => None,
        }
    }
}

/// Copy of a destination handed out by the trending ranking.
///
/// The score lives only on this view and is never written back to the store.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RankedDestination {
    #[serde(flatten)]
    pub destination: Destination,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending_score: Option<f64>,
}

impl RankedDestination {
    #[must_use]
    pub fn scored(destination: Destination, score: f64) -> Self {
        Self {
            destination,
            trending_score: Some(score),
        }
    }

    #[must_use]
    pub fn unscored(destination: Destination) -> Self {
        Self {
            destination,
            trending_score: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_use_defaults() {
        let destination: Destination =
            serde_json::from_value(json!({"id": "dest-042", "name": "Atlantis"})).unwrap();
        assert_eq!(destination.capital, "Unknown");
        assert_eq!(destination.population, 0);
        assert!(destination.languages.is_empty());
        assert!(destination.lat_lon().is_none());
    }

    #[test]
    fn test_lat_lon() {
        let destination: Destination = serde_json::from_value(json!({
            "id": "dest-003",
            "name": "Japan",
            "coordinates": [36, 138]
        }))
        .unwrap();
        assert_eq!(destination.lat_lon(), Some((36.0, 138.0)));
    }

    #[test]
    fn test_ranked_destination_flattens_score() {
        let destination: Destination =
            serde_json::from_value(json!({"id": "dest-001", "name": "United States"})).unwrap();

        let scored = serde_json::to_value(RankedDestination::scored(destination.clone(), 6.0)).unwrap();
        assert_eq!(scored["id"], "dest-001");
        assert_eq!(scored["trending_score"], 6.0);

        let unscored = serde_json::to_value(RankedDestination::unscored(destination)).unwrap();
        assert!(unscored.get("trending_score").is_none());
    }
}
