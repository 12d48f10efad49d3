//! Current weather report for a destination

use serde::{Deserialize, Serialize};

/// Current conditions at a destination.
///
/// Measurements the provider did not report are left out of the JSON.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherReport {
    pub destination_id: String,
    pub destination_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Measurement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apparent_temperature: Option<Measurement>,
    /// Relative humidity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<Measurement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation: Option<Measurement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<Measurement>,
    /// WMO weather interpretation code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_description: Option<String>,
    /// Observation time as reported by the provider, local to the destination
    pub timestamp: String,
    pub data_source: String,
}

/// A value together with its unit
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Measurement {
    pub value: f64,
    pub unit: String,
}

impl Measurement {
    #[must_use]
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Format value with unit
    #[must_use]
    pub fn format(&self) -> String {
        format!("{:.1}{}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_format() {
        assert_eq!(Measurement::new(21.04, "°C").format(), "21.0°C");
        assert_eq!(Measurement::new(65.0, "%").format(), "65.0%");
    }
}
