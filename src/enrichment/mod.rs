//! Destination enrichment engine
//!
//! Derived views over the destination snapshot: seasonal trending ranks,
//! simulated flight estimates and live weather reports. Every result is
//! memoized in the engine's [`ResponseCache`]; time-sensitive keys carry the
//! calendar day from the injected [`Clock`].

pub mod flights;
pub mod trending;
pub mod weather;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::cache::{CacheKey, ResponseCache};
use crate::clock::Clock;
use crate::models::{Destination, FlightEstimate, RankedDestination, WeatherReport};
use crate::providers::WeatherProvider;
use crate::{Result, TourEaseError};

pub use trending::Season;

const NO_DESTINATIONS: &str = "Destination data not available";

pub struct DestinationEnricher {
    cache: ResponseCache,
    clock: Arc<dyn Clock>,
    weather: Arc<dyn WeatherProvider>,
    upstream_timeout: Duration,
    trending_computations: AtomicUsize,
}

impl DestinationEnricher {
    pub fn new(
        clock: Arc<dyn Clock>,
        weather: Arc<dyn WeatherProvider>,
        upstream_timeout: Duration,
    ) -> Self {
        Self {
            cache: ResponseCache::new(),
            clock,
            weather,
            upstream_timeout,
            trending_computations: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// How many times trending ranks were computed rather than served from cache
    #[must_use]
    pub fn trending_computations(&self) -> usize {
        self.trending_computations.load(Ordering::Relaxed)
    }

    /// Seasonal trending ranking, cached per `limit`.
    ///
    /// The key does not include the season, so an entry computed before a
    /// season boundary keeps being served after it.
    #[instrument(skip(self, destinations))]
    pub fn trending(
        &self,
        destinations: &[Destination],
        limit: usize,
    ) -> Result<Vec<RankedDestination>> {
        let key = CacheKey::Trending { limit };
        if let Some(cached) = self.cache.get(&key)? {
            return Ok(cached);
        }
        if destinations.is_empty() {
            return Err(TourEaseError::data_unavailable(NO_DESTINATIONS));
        }

        let season = Season::from_month(self.clock.month());
        self.trending_computations.fetch_add(1, Ordering::Relaxed);
        let ranked = trending::rank_trending(destinations, season, limit);
        debug!(?season, count = ranked.len(), "Computed trending destinations");

        self.cache.put(&key, &ranked)?;
        Ok(ranked)
    }

    /// Simulated flight estimates from `origin`, cached per origin, limit and day
    #[instrument(skip(self, destinations))]
    pub fn flights(
        &self,
        destinations: &[Destination],
        origin: &str,
        limit: usize,
    ) -> Result<Vec<FlightEstimate>> {
        let origin = origin.trim();
        let now = self.clock.now();
        let key = CacheKey::Flights {
            origin: origin.to_string(),
            limit,
            date: now.date_naive(),
        };
        if let Some(cached) = self.cache.get(&key)? {
            return Ok(cached);
        }
        if destinations.is_empty() {
            return Err(TourEaseError::data_unavailable(NO_DESTINATIONS));
        }

        let estimates = flights::simulate_flights(destinations, origin, limit, now);
        self.cache.put(&key, &estimates)?;
        Ok(estimates)
    }

    /// Current weather at the destination with `destination_id`, cached per day
    #[instrument(skip(self, destinations))]
    pub async fn weather(
        &self,
        destinations: &[Destination],
        destination_id: &str,
    ) -> Result<WeatherReport> {
        let destination = destinations
            .iter()
            .find(|d| d.id == destination_id)
            .ok_or_else(|| TourEaseError::not_found("Destination not found"))?;

        let now = self.clock.now();
        let key = CacheKey::Weather {
            destination_id: destination_id.to_string(),
            date: now.date_naive(),
        };
        if let Some(cached) = self.cache.get(&key)? {
            return Ok(cached);
        }

        let (latitude, longitude) = destination.lat_lon().ok_or_else(|| {
            TourEaseError::data_unavailable("Destination coordinates not available")
        })?;

        let reading = tokio::time::timeout(
            self.upstream_timeout,
            self.weather.fetch_current_weather(latitude, longitude),
        )
        .await
        .map_err(|_| {
            TourEaseError::upstream(format!(
                "Failed to fetch weather data: no response within {}s",
                self.upstream_timeout.as_secs()
            ))
        })?
        .map_err(|e| TourEaseError::upstream(format!("Failed to fetch weather data: {e}")))?;

        let report = weather::build_report(destination, &reading, now)?;
        if let Some(temperature) = &report.temperature {
            info!(
                "Current weather at {}: {}",
                destination.name,
                temperature.format()
            );
        }

        self.cache.put(&key, &report)?;
        Ok(report)
    }
}
