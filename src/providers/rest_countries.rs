//! REST Countries client used to bootstrap the destination list

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, instrument};

use super::CountryProvider;
use crate::models::Destination;
use crate::{Result, TourEaseError};

pub struct RestCountriesClient {
    client: Client,
    url: String,
}

impl RestCountriesClient {
    /// `url` is the full listing endpoint, e.g. `https://restcountries.com/v3.1/all`
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("TourEase/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TourEaseError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CountryProvider for RestCountriesClient {
    #[instrument(skip(self))]
    async fn fetch_destinations(&self) -> Result<Vec<Destination>> {
        let countries: Vec<Country> = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| TourEaseError::upstream(e.to_string()))?
            .json()
            .await
            .map_err(|e| TourEaseError::upstream(format!("Invalid country data: {e}")))?;

        let destinations = into_destinations(countries, Utc::now());
        info!("Fetched {} destinations from country provider", destinations.len());
        Ok(destinations)
    }
}

/// Country record as returned by REST Countries v3.1
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Country {
    pub name: CountryName,
    pub capital: Vec<String>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub population: u64,
    pub languages: BTreeMap<String, String>,
    pub currencies: BTreeMap<String, Currency>,
    pub flags: Flags,
    pub latlng: Vec<f64>,
    pub timezones: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CountryName {
    pub common: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Flags {
    pub png: String,
}

/// Number countries as `dest-001`, `dest-002`, ... in provider order
#[must_use]
pub fn into_destinations(countries: Vec<Country>, now: DateTime<Utc>) -> Vec<Destination> {
    countries
        .into_iter()
        .enumerate()
        .map(|(i, country)| Destination {
            id: format!("dest-{:03}", i + 1),
            name: country.name.common.unwrap_or_else(|| "Unknown".to_string()),
            capital: country
                .capital
                .into_iter()
                .next()
                .unwrap_or_else(|| "Unknown".to_string()),
            region: country.region.unwrap_or_else(|| "Unknown".to_string()),
            subregion: country.subregion.unwrap_or_else(|| "Unknown".to_string()),
            population: country.population,
            languages: country.languages.into_values().collect(),
            currencies: country.currencies.into_values().map(|c| c.name).collect(),
            flag: country.flags.png,
            coordinates: if country.latlng.is_empty() {
                vec![0.0, 0.0]
            } else {
                country.latlng
            },
            timezones: country.timezones,
            created_at: Some(now),
            updated_at: Some(now),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_conversion_fills_gaps() {
        let countries: Vec<Country> = serde_json::from_value(json!([
            {
                "name": {"common": "Iceland"},
                "capital": ["Reykjavik"],
                "region": "Europe",
                "subregion": "Northern Europe",
                "population": 366425,
                "languages": {"isl": "Icelandic"},
                "currencies": {"ISK": {"name": "Icelandic króna", "symbol": "kr"}},
                "flags": {"png": "https://flagcdn.com/w320/is.png"},
                "latlng": [65.0, -18.0],
                "timezones": ["UTC"]
            },
            {"name": {"common": "Bouvet Island"}}
        ]))
        .unwrap();

        let destinations = into_destinations(countries, Utc::now());
        assert_eq!(destinations[0].id, "dest-001");
        assert_eq!(destinations[0].capital, "Reykjavik");
        assert_eq!(destinations[0].currencies, vec!["Icelandic króna"]);

        assert_eq!(destinations[1].id, "dest-002");
        assert_eq!(destinations[1].capital, "Unknown");
        assert_eq!(destinations[1].region, "Unknown");
        assert_eq!(destinations[1].coordinates, vec![0.0, 0.0]);
    }

    #[tokio::test]
    async fn test_fetch_destinations() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3.1/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": {"common": "Japan"}, "region": "Asia", "population": 125836021}
            ])))
            .mount(&server)
            .await;

        let client = RestCountriesClient::new(
            format!("{}/v3.1/all", server.uri()),
            Duration::from_secs(5),
        )
        .unwrap();
        let destinations = client.fetch_destinations().await.unwrap();
        assert_eq!(destinations.len(), 1);
        assert_eq!(destinations[0].name, "Japan");
        assert_eq!(destinations[0].population, 125_836_021);
    }
}
