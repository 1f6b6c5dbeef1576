use axum::http::StatusCode;
use thiserror::Error;
use validator::ValidationErrors;

pub mod store;

pub use store::StoreError;

/// Common trait for all custom error types in the application
pub trait AppError: std::error::Error + Send + Sync + 'static {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get the error code for frontend handling
    fn error_code(&self) -> &'static str;

    /// Name of the offending input field, when known
    fn field(&self) -> Option<&str> {
        None
    }
}

/// Macro to implement IntoResponse for all AppError types
/// This provides consistent HTTP response formatting
macro_rules! impl_into_response {
    ($error_type:ty) => {
        impl axum::response::IntoResponse for $error_type {
            fn into_response(self) -> axum::response::Response {
                use crate::errors::AppError;
                use axum::response::Json;
                use serde_json::json;

                let status = self.status_code();
                if status.is_server_error() {
                    tracing::error!("{} ({})", self, self.error_code());
                } else {
                    tracing::debug!("Rejected request: {} ({})", self, self.error_code());
                }

                let mut body = json!({
                    "error": self.user_message(),
                    "code": self.error_code(),
                    "status": status.as_u16()
                });
                if let Some(field) = self.field() {
                    body["field"] = json!(field);
                }

                (status, Json(body)).into_response()
            }
        }
    };
}

/// Errors surfaced by the HTTP handlers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed: {message}")]
    Validation { field: Option<String>, message: String },

    #[error("Malformed identifier '{value}'")]
    MalformedIdentifier { value: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MalformedIdentifier { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn user_message(&self) -> String {
        match self {
            ApiError::Validation { message, .. } => message.clone(),
            ApiError::MalformedIdentifier { .. } => "Invalid identifier".to_string(),
            ApiError::NotFound { resource } => format!("{} not found", resource),
            ApiError::Store(_) => "An internal error occurred".to_string(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::MalformedIdentifier { .. } => "MALFORMED_IDENTIFIER",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Store(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    fn field(&self) -> Option<&str> {
        match self {
            ApiError::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

impl_into_response!(ApiError);

impl ApiError {
    pub fn validation<S: Into<String>>(field: Option<&str>, message: S) -> Self {
        Self::Validation {
            field: field.map(str::to_string),
            message: message.into(),
        }
    }

    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Maps a body deserialization failure to a validation error naming the
    /// offending field. The path points at the mismatched value; for a missing
    /// field it points at the enclosing object, so the name is appended.
    pub fn from_deserialize(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let message = err.inner().to_string();
        let mut path = err.path().to_string();

        if let Some(missing) = message
            .strip_prefix("missing field `")
            .and_then(|rest| rest.split('`').next())
        {
            path = if path == "." {
                missing.to_string()
            } else {
                format!("{}.{}", path, missing)
            };
        }

        let field = (path != ".").then_some(path);
        Self::Validation { field, message }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<_> = field_errors.keys().collect();
        fields.sort();

        match fields.first() {
            Some(field) => {
                let message = field_errors[*field]
                    .first()
                    .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| format!("Invalid value for '{}'", field));
                Self::Validation {
                    field: Some(field.to_string()),
                    message,
                }
            }
            None => Self::Validation {
                field: None,
                message: errors.to_string(),
            },
        }
    }
}
