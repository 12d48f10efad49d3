//! Third-party data providers
//!
//! The enrichment engine and the destination listing only see these traits;
//! the concrete HTTP clients live in the submodules:
//! - `open_meteo`: current weather conditions
//! - `rest_countries`: country records used to bootstrap destinations

pub mod open_meteo;
pub mod rest_countries;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::models::Destination;

pub use open_meteo::OpenMeteoClient;
pub use rest_countries::RestCountriesClient;

/// Source of current weather conditions
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch_current_weather(&self, latitude: f64, longitude: f64) -> Result<WeatherReading>;
}

/// Source of country data for bootstrapping an empty destination store
#[async_trait]
pub trait CountryProvider: Send + Sync {
    async fn fetch_destinations(&self) -> Result<Vec<Destination>>;
}

/// Raw current-conditions reading.
///
/// Every field is optional; the provider may leave out any of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherReading {
    pub current: Option<CurrentConditions>,
    #[serde(default)]
    pub current_units: CurrentUnits,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Local observation time, e.g. `"2024-07-15T14:00"`
    pub time: Option<String>,
    #[serde(rename = "temperature_2m")]
    pub temperature: Option<f64>,
    #[serde(rename = "relative_humidity_2m")]
    pub humidity: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub precipitation: Option<f64>,
    pub rain: Option<f64>,
    pub weather_code: Option<i64>,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrentUnits {
    #[serde(rename = "temperature_2m")]
    pub temperature: Option<String>,
    #[serde(rename = "relative_humidity_2m")]
    pub humidity: Option<String>,
    pub apparent_temperature: Option<String>,
    pub precipitation: Option<String>,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: Option<String>,
}
