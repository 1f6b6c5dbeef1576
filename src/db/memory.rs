use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{DocumentId, DocumentStore, Filter, StoredDocument, INTERNAL_ID_FIELD, PUBLIC_ID_FIELD};
use crate::errors::StoreError;

/// In-process document store. Collections keep insertion order.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<StoredDocument>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, mut document: Map<String, Value>) -> Result<DocumentId, StoreError> {
        document.remove(INTERNAL_ID_FIELD);
        document.remove(PUBLIC_ID_FIELD);

        let id = DocumentId::new();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument { id, fields: document });
        Ok(id)
    }

    async fn find(&self, collection: &str, filter: &Filter, limit: Option<i64>) -> Result<Vec<StoredDocument>, StoreError> {
        let collections = self.collections.read().await;
        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let limit = limit.map_or(usize::MAX, |l| l.max(0) as usize);
        Ok(documents
            .iter()
            .filter(|doc| filter.matches(&doc.fields))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_one(&self, collection: &str, id: DocumentId) -> Result<Option<StoredDocument>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .cloned())
    }

    async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map_or(0, |docs| docs.iter().filter(|doc| filter.matches(&doc.fields)).count() as u64))
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        let collections = self.collections.read().await;
        let mut names: Vec<String> = collections
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        Ok(names)
    }
}
