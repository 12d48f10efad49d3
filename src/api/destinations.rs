use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use tracing::{info, warn};

use super::SharedState;
use super::params::{
    self, DEFAULT_LISTING_LIMIT, DEFAULT_RANKING_LIMIT, DestinationParams, FlightParams,
    LimitParams, MAX_LISTING_LIMIT, MAX_RANKING_LIMIT,
};
use crate::catalog::{self, ByPopulation};
use crate::models::{Destination, FlightEstimate, RankedDestination, WeatherReport};
use crate::store::RecordKind;
use crate::{Result, TourEaseError};

fn load_destinations(state: &SharedState) -> Vec<Destination> {
    state.store.load(RecordKind::Destinations)
}

pub async fn trending_destinations(
    State(state): State<SharedState>,
    query: std::result::Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<Vec<RankedDestination>>> {
    let params = params::extract(query)?;
    let limit = params::bounded_limit(params.limit, DEFAULT_RANKING_LIMIT, MAX_RANKING_LIMIT)?;
    let destinations = load_destinations(&state);
    Ok(Json(state.enricher.trending(&destinations, limit)?))
}

/// Most populous destinations; an empty store yields an empty list.
pub async fn popular_destinations(
    State(state): State<SharedState>,
    query: std::result::Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<Vec<Destination>>> {
    let params = params::extract(query)?;
    let limit = params::bounded_limit(params.limit, DEFAULT_RANKING_LIMIT, MAX_RANKING_LIMIT)?;
    Ok(Json(catalog::most_populous(load_destinations(&state), limit)))
}

pub async fn flight_estimates(
    State(state): State<SharedState>,
    query: std::result::Result<Query<FlightParams>, QueryRejection>,
) -> Result<Json<Vec<FlightEstimate>>> {
    let params = params::extract(query)?;
    let origin = params.origin()?;
    let limit = params::bounded_limit(params.limit, DEFAULT_LISTING_LIMIT, MAX_LISTING_LIMIT)?;
    let destinations = load_destinations(&state);
    Ok(Json(state.enricher.flights(&destinations, origin, limit)?))
}

/// Filtered destination list.
///
/// An empty store is filled from the country-data provider first, and the
/// fetched records are persisted for later requests.
pub async fn list_destinations(
    State(state): State<SharedState>,
    query: std::result::Result<Query<DestinationParams>, QueryRejection>,
) -> Result<Json<Vec<Destination>>> {
    let params = params::extract(query)?;
    let limit = params::bounded_limit(params.limit, DEFAULT_LISTING_LIMIT, MAX_LISTING_LIMIT)?;

    let mut destinations = load_destinations(&state);
    if destinations.is_empty() {
        destinations = fetch_and_persist(&state).await?;
    }

    let mut selected = catalog::filter_and_sort::<_, _, ByPopulation>(
        destinations,
        &params.predicates(),
        None,
    );
    selected.truncate(limit);
    Ok(Json(selected))
}

async fn fetch_and_persist(state: &SharedState) -> Result<Vec<Destination>> {
    let fetched = tokio::time::timeout(state.provider_timeout, state.countries.fetch_destinations())
        .await
        .map_err(|_| {
            TourEaseError::upstream(format!(
                "Failed to fetch destinations: no response within {}s",
                state.provider_timeout.as_secs()
            ))
        })?
        .map_err(|e| TourEaseError::upstream(format!("Failed to fetch destinations: {e}")))?;

    if state.store.save(RecordKind::Destinations, &fetched) {
        info!("Stored {} destinations from country provider", fetched.len());
    } else {
        warn!("Could not persist fetched destinations");
    }
    Ok(fetched)
}

pub async fn get_destination(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Destination>> {
    load_destinations(&state)
        .into_iter()
        .find(|d| d.id == id)
        .map(Json)
        .ok_or_else(|| TourEaseError::not_found("Destination not found"))
}

pub async fn destination_weather(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<WeatherReport>> {
    let destinations = load_destinations(&state);
    Ok(Json(state.enricher.weather(&destinations, &id).await?))
}
