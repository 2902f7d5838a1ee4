use axum::{http::StatusCode, middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    middleware::{make_span_with_request_id, request_id_middleware},
    services::Catalog,
};

pub mod browse;
pub mod titles;

/// Shared, read-only state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub section_size: usize,
    pub related_limit: usize,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        Self {
            catalog,
            section_size: config.section_size,
            related_limit: config.related_limit,
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .with_state(Arc::new(state))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/titles", get(titles::list))
        .route("/titles/:id", get(titles::details))
        .route("/titles/:id/related", get(titles::related))
        .route("/home", get(browse::home))
        .route("/genres", get(browse::genres))
        .route("/years", get(browse::years))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
