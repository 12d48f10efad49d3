use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};

use super::SharedState;
use super::params::{self, TourParams};
use crate::catalog;
use crate::models::{Tour, TourGuide};
use crate::store::RecordKind;
use crate::{Result, TourEaseError};

fn find_tour(state: &SharedState, id: &str) -> Result<Tour> {
    state
        .store
        .load::<Tour>(RecordKind::Tours)
        .into_iter()
        .find(|t| t.id == id)
        .ok_or_else(|| TourEaseError::not_found(format!("Tour with ID {id} not found")))
}

pub async fn list_tours(
    State(state): State<SharedState>,
    query: std::result::Result<Query<TourParams>, QueryRejection>,
) -> Result<Json<Vec<Tour>>> {
    let params = params::extract(query)?;
    let tours: Vec<Tour> = state.store.load(RecordKind::Tours);
    Ok(Json(catalog::filter_and_sort(
        tours,
        &params.predicates()?,
        params.sort().as_ref(),
    )))
}

pub async fn get_tour(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Tour>> {
    find_tour(&state, &id).map(Json)
}

/// Guide leading the tour with `id`
pub async fn get_tour_guide(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<TourGuide>> {
    let tour = find_tour(&state, &id)?;
    state
        .store
        .load::<TourGuide>(RecordKind::Guides)
        .into_iter()
        .find(|g| g.id == tour.guide_id)
        .map(Json)
        .ok_or_else(|| TourEaseError::not_found(format!("Guide for tour {id} not found")))
}
