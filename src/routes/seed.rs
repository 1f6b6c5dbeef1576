use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::{errors::ApiError, models::MessageResponse, seed, AppState};

pub const DEMO_DATA_READY: &str = "تم تجهيز بيانات توضيحية";

#[utoipa::path(
    post,
    path = "/seed",
    tag = "system",
    responses(
        (status = 200, description = "Demo data present", body = MessageResponse)
    )
)]
pub async fn seed_demo_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MessageResponse>, ApiError> {
    seed::seed_demo_data(state.store.as_ref()).await?;

    Ok(Json(MessageResponse {
        message: DEMO_DATA_READY.to_string(),
    }))
}
