use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    routes::AppState,
    services::browse::{self, HomeSections},
};

/// Handler for the landing page sections
pub async fn home(State(state): State<Arc<AppState>>) -> Json<HomeSections> {
    Json(browse::home_sections(&state.catalog, state.section_size))
}

/// Handler listing every genre name
pub async fn genres() -> Json<Vec<&'static str>> {
    Json(browse::genre_names())
}

/// Handler listing the release years present in the catalog
pub async fn years(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(browse::release_years(&state.catalog))
}
