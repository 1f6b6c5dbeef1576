use axum::{extract::State, response::Json};
use std::sync::Arc;

use super::ValidatedJson;
use crate::{
    db::create_document,
    errors::ApiError,
    models::{Booking, CreatedResponse},
    AppState,
};

pub const BOOKING_RECEIVED: &str = "تم استلام طلب الحجز وسنتواصل معك قريبًا";

#[utoipa::path(
    post,
    path = "/book",
    tag = "bookings",
    request_body = Booking,
    responses(
        (status = 200, description = "Booking stored", body = CreatedResponse),
        (status = 422, description = "Invalid booking payload")
    )
)]
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<Booking>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = create_document(state.store.as_ref(), &payload).await?;

    Ok(Json(CreatedResponse {
        id: id.to_string(),
        message: BOOKING_RECEIVED.to_string(),
    }))
}
