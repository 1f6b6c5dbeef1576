pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod routes;
pub mod seed;
pub mod swagger;
pub mod test_utils;

#[cfg(test)]
mod tests;

use axum::Router;
use config::Config;
use db::DocumentStore;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub config: Config,
}

/// Full application router: API routes, OpenAPI docs, CORS and request tracing.
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::router())
        .merge(swagger::create_swagger_router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
