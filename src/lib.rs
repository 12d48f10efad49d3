//! `TourEase` - travel catalog API
//!
//! Serves tour guides, tours and destinations from flat JSON files, enriched
//! with seasonal trending ranks, simulated flight prices and live weather.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod logging;
pub mod models;
pub mod providers;
pub mod seed;
pub mod store;
pub mod web;

// Re-export core types for public API
pub use cache::{CacheKey, ResponseCache};
pub use config::TourEaseConfig;
pub use enrichment::DestinationEnricher;
pub use error::TourEaseError;
pub use models::{Destination, FlightEstimate, RankedDestination, Tour, TourGuide, WeatherReport};
pub use store::{RecordKind, RecordStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TourEaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
