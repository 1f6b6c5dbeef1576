use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::{
    models::{RootResponse, StoreProbeResponse},
    AppState,
};

pub const SERVICE_NAME: &str = "Promparty Rent";

#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses(
        (status = 200, description = "Service is up", body = RootResponse)
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        name: SERVICE_NAME.to_string(),
        status: "ok".to_string(),
    })
}

/// Store connectivity probe. Store failures are reported in the body, the
/// request itself always succeeds.
#[utoipa::path(
    get,
    path = "/test",
    tag = "system",
    responses(
        (status = 200, description = "Backend and store status", body = StoreProbeResponse)
    )
)]
pub async fn test_store(State(state): State<Arc<AppState>>) -> Json<StoreProbeResponse> {
    match state.store.list_collections().await {
        Ok(collections) => Json(StoreProbeResponse {
            backend: "ok".to_string(),
            db: "ok".to_string(),
            collections: Some(collections),
        }),
        Err(e) => {
            tracing::warn!("Store connectivity probe failed: {}", e);
            Json(StoreProbeResponse {
                backend: "ok".to_string(),
                db: format!("error: {}", e),
                collections: None,
            })
        }
    }
}
