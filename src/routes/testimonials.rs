use axum::{extract::State, response::Json};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::{
    db::{normalize_all, Filter},
    errors::ApiError,
    models::{Record, Testimonial},
    AppState,
};

/// Most testimonials returned by a single listing.
pub const TESTIMONIALS_LIMIT: i64 = 20;

#[utoipa::path(
    get,
    path = "/testimonials",
    tag = "testimonials",
    responses(
        (status = 200, description = "Up to 20 testimonials, each with a string `id`", body = Vec<Testimonial>)
    )
)]
pub async fn list_testimonials(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Map<String, Value>>>, ApiError> {
    let documents = state
        .store
        .find(Testimonial::COLLECTION, &Filter::new(), Some(TESTIMONIALS_LIMIT))
        .await?;
    Ok(Json(normalize_all(documents)))
}
