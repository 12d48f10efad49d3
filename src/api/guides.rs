use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};

use super::SharedState;
use super::params::{self, GuideParams};
use crate::catalog;
use crate::models::TourGuide;
use crate::store::RecordKind;
use crate::{Result, TourEaseError};

pub async fn list_guides(
    State(state): State<SharedState>,
    query: std::result::Result<Query<GuideParams>, QueryRejection>,
) -> Result<Json<Vec<TourGuide>>> {
    let params = params::extract(query)?;
    let guides: Vec<TourGuide> = state.store.load(RecordKind::Guides);
    Ok(Json(catalog::filter_and_sort(
        guides,
        &params.predicates()?,
        params.sort().as_ref(),
    )))
}

pub async fn get_guide(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<TourGuide>> {
    state
        .store
        .load::<TourGuide>(RecordKind::Guides)
        .into_iter()
        .find(|g| g.id == id)
        .map(Json)
        .ok_or_else(|| TourEaseError::not_found(format!("Tour guide with ID {id} not found")))
}
