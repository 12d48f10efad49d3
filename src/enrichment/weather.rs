//! Formatting of provider weather readings into destination reports

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::{Destination, Measurement, WeatherReport};
use crate::providers::WeatherReading;
use crate::{Result, TourEaseError};

const DATA_SOURCE: &str = "Open-Meteo API";

/// Convert a WMO weather interpretation code to a description
#[must_use]
pub fn weather_code_to_description(code: i64) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

fn measurement(value: Option<f64>, unit: Option<&str>, default_unit: &str) -> Option<Measurement> {
    value.map(|v| Measurement::new(v, unit.unwrap_or(default_unit)))
}

/// Build the report for `destination` from a raw provider reading.
///
/// Fails only when the reading has no current-conditions block at all;
/// individual missing values are left out of the report. `now` stands in for
/// a missing observation time.
pub fn build_report(
    destination: &Destination,
    reading: &WeatherReading,
    now: DateTime<Utc>,
) -> Result<WeatherReport> {
    let current = reading
        .current
        .as_ref()
        .ok_or_else(|| TourEaseError::upstream("Weather data format not as expected"))?;
    let units = &reading.current_units;

    Ok(WeatherReport {
        destination_id: destination.id.clone(),
        destination_name: destination.name.clone(),
        temperature: measurement(current.temperature, units.temperature.as_deref(), "°C"),
        apparent_temperature: measurement(
            current.apparent_temperature,
            units.apparent_temperature.as_deref(),
            "°C",
        ),
        humidity: measurement(current.humidity, units.humidity.as_deref(), "%"),
        precipitation: measurement(current.precipitation, units.precipitation.as_deref(), "mm"),
        wind_speed: measurement(current.wind_speed, units.wind_speed.as_deref(), "km/h"),
        weather_code: current.weather_code,
        weather_description: current
            .weather_code
            .map(|code| weather_code_to_description(code).to_string()),
        timestamp: current
            .time
            .clone()
            .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Secs, true)),
        data_source: DATA_SOURCE.to_string(),
    })
}
