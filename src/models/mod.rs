//! Data models for the TourEase catalog
//!
//! This module contains the catalog records and the enriched views built on top:
//! - Destination: country-level destination records and their ranked view
//! - Tour / TourGuide: bookable tours and the guides running them
//! - Flight: simulated flight price estimates
//! - Weather: current conditions reported for a destination

pub mod destination;
pub mod flight;
pub mod guide;
mod timestamp;
pub mod tour;
pub mod weather;

// Re-export all public types for convenient access
pub use destination::{Destination, RankedDestination};
pub use flight::{BookingAdvice, FlightEstimate, PriceEstimate, PriceTrend};
pub use guide::{GuideAvailability, GuideContact, TourGuide};
pub use tour::Tour;
pub use weather::{Measurement, WeatherReport};
