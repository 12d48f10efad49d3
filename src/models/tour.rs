use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookable tour as persisted in `tours.json`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Tour {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Duration in hours, always positive
    pub duration_hours: f64,
    /// Price in USD
    pub price: f64,
    pub location: String,
    pub max_participants: u32,
    /// Id of the guide running the tour; not checked against the guide list
    pub guide_id: String,
    /// Average rating, 0-5
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub meeting_point: String,
    #[serde(default, with = "super::timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "super::timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
