use axum::{extract::State, response::Json};
use std::sync::Arc;

use super::ValidatedJson;
use crate::{
    db::create_document,
    errors::ApiError,
    models::{ContactMessage, CreatedResponse},
    AppState,
};

pub const MESSAGE_RECEIVED: &str = "تم استلام رسالتك";

#[utoipa::path(
    post,
    path = "/contact",
    tag = "contact",
    request_body = ContactMessage,
    responses(
        (status = 200, description = "Message stored", body = CreatedResponse),
        (status = 422, description = "Invalid message payload")
    )
)]
pub async fn create_contact_message(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<ContactMessage>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = create_document(state.store.as_ref(), &payload).await?;

    Ok(Json(CreatedResponse {
        id: id.to_string(),
        message: MESSAGE_RECEIVED.to_string(),
    }))
}
