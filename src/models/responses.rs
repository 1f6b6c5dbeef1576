use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Returned by the create endpoints
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    /// Identifier assigned to the new document
    pub id: String,
    /// Acknowledgement shown to the visitor
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub name: String,
    pub status: String,
}

/// Store connectivity probe result. On failure `db` carries `error: <reason>`
/// and `collections` is omitted.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StoreProbeResponse {
    pub backend: String,
    pub db: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub collections: Option<Vec<String>>,
}
