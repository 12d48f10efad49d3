use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tour guide as persisted in `tour_guides.json`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TourGuide {
    pub id: String,
    pub name: String,
    /// Age in years, 18-99
    pub age: u8,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub experience_years: u32,
    /// Average rating, 0-5
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub bio: String,
    pub contact: GuideContact,
    pub availability: GuideAvailability,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub profile_image: String,
    #[serde(default)]
    pub tours_conducted: u32,
    #[serde(default, with = "super::timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "super::timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GuideContact {
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GuideAvailability {
    /// Weekday names, e.g. `"Monday"`
    pub days: Vec<String>,
    /// Free-form hour range, e.g. `"9:00 AM - 6:00 PM"`
    pub hours: String,
}
