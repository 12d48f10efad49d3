//! HTTP surface
//!
//! Thin handlers: each one loads the records it needs from the store, applies
//! the catalog or enrichment engine and serializes the result.

pub mod destinations;
pub mod guides;
pub mod params;
pub mod tours;

use std::sync::Arc;
use std::time::Duration;

use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::clock::Clock;
use crate::enrichment::DestinationEnricher;
use crate::providers::CountryProvider;
use crate::store::RecordStore;

/// Everything a handler needs, shared across requests
pub struct AppState {
    pub store: RecordStore,
    pub enricher: DestinationEnricher,
    pub countries: Arc<dyn CountryProvider>,
    pub clock: Arc<dyn Clock>,
    /// Upper bound for the country-data fallback fetch
    pub provider_timeout: Duration,
}

pub type SharedState = Arc<AppState>;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/destinations", get(destinations::list_destinations))
        .route("/destinations/trending", get(destinations::trending_destinations))
        .route("/destinations/popular", get(destinations::popular_destinations))
        .route("/destinations/flights", get(destinations::flight_estimates))
        .route("/destinations/{id}", get(destinations::get_destination))
        .route("/destinations/{id}/weather", get(destinations::destination_weather))
        .route("/tour-guides", get(guides::list_guides))
        .route("/tour-guides/{id}", get(guides::get_guide))
        .route("/tours", get(tours::list_tours))
        .route("/tours/{id}", get(tours::get_tour))
        .route("/tours/{id}/guide", get(tours::get_tour_guide))
        .with_state(state)
}

#[derive(Serialize)]
pub struct Welcome {
    pub message: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

async fn root() -> Json<Welcome> {
    Json(Welcome {
        message: "Welcome to the TourEase API",
        version: crate::VERSION,
    })
}

async fn health(State(state): State<SharedState>) -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "OK",
        timestamp: state.clock.now(),
    })
}
