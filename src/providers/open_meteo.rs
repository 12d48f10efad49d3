//! Open-Meteo current weather client (no API key required)

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use super::{WeatherProvider, WeatherReading};
use crate::{Result, TourEaseError};

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,precipitation,rain,weather_code,wind_speed_10m";

pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

impl OpenMeteoClient {
    /// `base_url` is the API root, e.g. `https://api.open-meteo.com/v1`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("TourEase/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TourEaseError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn forecast_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current={}&timezone=auto",
            self.base_url, latitude, longitude, CURRENT_FIELDS
        )
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    #[instrument(skip(self))]
    async fn fetch_current_weather(&self, latitude: f64, longitude: f64) -> Result<WeatherReading> {
        let url = self.forecast_url(latitude, longitude);
        debug!("OpenMeteo API request URL: {}", url);
        let start_time = Instant::now();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| TourEaseError::upstream(e.to_string()))?;

        let reading: WeatherReading = response.json().await.map_err(|e| {
            TourEaseError::upstream(format!("Invalid weather data received from OpenMeteo API: {e}"))
        })?;

        let elapsed = start_time.elapsed();
        info!("Retrieved current weather in {:.3}s", elapsed.as_secs_f64());
        if elapsed.as_secs() > 5 {
            warn!("Slow API response detected: {:.3}s", elapsed.as_secs_f64());
        }

        Ok(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_parses_current_block() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "46"))
            .and(query_param("longitude", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "latitude": 46.0,
                "longitude": 2.0,
                "current_units": {"temperature_2m": "°C", "wind_speed_10m": "km/h"},
                "current": {
                    "time": "2024-07-15T14:00",
                    "temperature_2m": 24.3,
                    "weather_code": 2,
                    "wind_speed_10m": 11.5
                }
            })))
            .mount(&server)
            .await;

        let client =
            OpenMeteoClient::new(format!("{}/v1", server.uri()), Duration::from_secs(5)).unwrap();
        let reading = client.fetch_current_weather(46.0, 2.0).await.unwrap();

        let current = reading.current.unwrap();
        assert_eq!(current.temperature, Some(24.3));
        assert_eq!(current.weather_code, Some(2));
        assert!(current.humidity.is_none());
        assert_eq!(reading.current_units.wind_speed.as_deref(), Some("km/h"));
    }

    #[tokio::test]
    async fn test_server_error_is_upstream_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = OpenMeteoClient::new(server.uri(), Duration::from_secs(5)).unwrap();
        let err = client.fetch_current_weather(0.0, 0.0).await.unwrap_err();
        assert!(matches!(err, TourEaseError::UpstreamFailure { .. }));
    }
}
