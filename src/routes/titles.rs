use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{FilterParams, FilterSpec, TitleCard, TitleDetails},
    routes::AppState,
    services::browse,
};

/// Handler for the filtered, sorted title listing
pub async fn list(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<FilterParams>,
) -> Json<Vec<TitleCard>> {
    let spec = FilterSpec::from(params);
    let result = state.catalog.query(&spec);

    tracing::info!(
        request_id = %request_id,
        sort = %spec.sort_key,
        matched = result.len(),
        total = state.catalog.len(),
        "Catalog query evaluated"
    );
    tracing::debug!(request_id = %request_id, spec = ?spec, "Active filter");

    Json(result.into_iter().map(TitleCard::from).collect())
}

/// Handler for a single title's detail page
pub async fn details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<TitleDetails>> {
    let entry = state
        .catalog
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("title '{}'", id)))?;

    Ok(Json(TitleDetails::from(entry)))
}

/// Handler for titles related to a given one
pub async fn related(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<TitleCard>>> {
    let entry = state
        .catalog
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("title '{}'", id)))?;

    let related = browse::related_titles(&state.catalog, entry, state.related_limit);
    tracing::debug!(id = %id, related = related.len(), "Related titles resolved");

    Ok(Json(related))
}
