use thiserror::Error;

/// Failures raised by a `DocumentStore` backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Document in collection '{collection}' is not a JSON object")]
    NotAnObject { collection: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
