use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::{ApiError, StoreError};
use crate::models::Record;

pub mod filter;
pub mod memory;
pub mod postgres;

pub use filter::{Clause, Filter};
pub use memory::MemoryStore;
pub use postgres::Database;

/// Field under which a store keeps its internal identifier.
pub const INTERNAL_ID_FIELD: &str = "_id";
/// Field under which the identifier is exposed to API consumers.
pub const PUBLIC_ID_FIELD: &str = "id";

/// Store-assigned identifier of a document.
///
/// Rendered as the 32 digit lowercase hex form of the underlying UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for DocumentId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for DocumentId {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::try_parse(s)
            .map(Self)
            .map_err(|_| ApiError::MalformedIdentifier { value: s.to_string() })
    }
}

/// A document as held by the store: its identifier plus the body fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: DocumentId,
    pub fields: Map<String, Value>,
}

impl StoredDocument {
    /// Rewrites the document for transport: drops any internal identifier
    /// field and exposes the identifier as a plain string under `id`.
    pub fn normalize(self) -> Map<String, Value> {
        let mut fields = self.fields;
        fields.remove(INTERNAL_ID_FIELD);
        fields.insert(PUBLIC_ID_FIELD.to_string(), Value::String(self.id.to_string()));
        fields
    }
}

pub fn normalize_all(documents: Vec<StoredDocument>) -> Vec<Map<String, Value>> {
    documents.into_iter().map(StoredDocument::normalize).collect()
}

/// Persistence backend holding loosely structured documents in named collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts one document and returns the identifier the store assigned to it.
    async fn insert(&self, collection: &str, document: Map<String, Value>) -> Result<DocumentId, StoreError>;

    /// Returns matching documents in insertion order, at most `limit` of them.
    async fn find(&self, collection: &str, filter: &Filter, limit: Option<i64>) -> Result<Vec<StoredDocument>, StoreError>;

    async fn find_one(&self, collection: &str, id: DocumentId) -> Result<Option<StoredDocument>, StoreError>;

    async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError>;

    /// Names of the collections currently holding documents, sorted.
    async fn list_collections(&self) -> Result<Vec<String>, StoreError>;
}

/// Validates a record and inserts it into its collection.
pub async fn create_document<R: Record>(store: &dyn DocumentStore, record: &R) -> Result<DocumentId, ApiError> {
    record.validate()?;

    let fields = match serde_json::to_value(record).map_err(StoreError::from)? {
        Value::Object(fields) => fields,
        _ => {
            return Err(StoreError::NotAnObject {
                collection: R::COLLECTION.to_string(),
            }
            .into())
        }
    };

    let id = store.insert(R::COLLECTION, fields).await?;
    tracing::info!("Created {} document {}", R::COLLECTION, id);
    Ok(id)
}
