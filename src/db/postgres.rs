use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::{postgres::PgPoolOptions, types::Json, PgPool, Postgres, QueryBuilder, Row};
use std::time::Duration;
use uuid::Uuid;

use super::{DocumentId, DocumentStore, Filter, StoredDocument, INTERNAL_ID_FIELD, PUBLIC_ID_FIELD};
use crate::errors::StoreError;

/// Postgres-backed document store. Every collection lives in the single
/// `documents` table with its body kept as JSONB.
#[derive(Clone)]
pub struct Database {
    pub pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .min_connections(1)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        tracing::info!("Running SQLx migrations...");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("SQLx migrations completed successfully");
        Ok(())
    }

    fn select(collection: &str, columns: &str) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(format!("SELECT {} FROM documents WHERE collection = ", columns));
        builder.push_bind(collection.to_string());
        builder
    }
}

fn row_to_document(row: &sqlx::postgres::PgRow) -> Result<StoredDocument, StoreError> {
    let id: Uuid = row.try_get("id")?;
    let Json(fields): Json<Map<String, Value>> = row.try_get("body")?;
    Ok(StoredDocument { id: id.into(), fields })
}

#[async_trait]
impl DocumentStore for Database {
    async fn insert(&self, collection: &str, mut document: Map<String, Value>) -> Result<DocumentId, StoreError> {
        document.remove(INTERNAL_ID_FIELD);
        document.remove(PUBLIC_ID_FIELD);

        let id = DocumentId::new();
        sqlx::query("INSERT INTO documents (id, collection, body) VALUES ($1, $2, $3)")
            .bind(id.as_uuid())
            .bind(collection)
            .bind(Json(document))
            .execute(&self.pool)
            .await?;
        Ok(id)
    }

    async fn find(&self, collection: &str, filter: &Filter, limit: Option<i64>) -> Result<Vec<StoredDocument>, StoreError> {
        let mut builder = Self::select(collection, "id, body");
        filter.push_sql(&mut builder);
        builder.push(" ORDER BY seq");
        if let Some(limit) = limit {
            builder.push(" LIMIT ").push_bind(limit.max(0));
        }

        let rows = builder.build().fetch_all(&self.pool).await?;
        rows.iter().map(row_to_document).collect()
    }

    async fn find_one(&self, collection: &str, id: DocumentId) -> Result<Option<StoredDocument>, StoreError> {
        let row = sqlx::query("SELECT id, body FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_document).transpose()
    }

    async fn count(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError> {
        let mut builder = Self::select(collection, "COUNT(*) AS total");
        filter.push_sql(&mut builder);

        let row = builder.build().fetch_one(&self.pool).await?;
        let total: i64 = row.try_get("total")?;
        Ok(total.max(0) as u64)
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        let rows = sqlx::query("SELECT DISTINCT collection FROM documents ORDER BY collection")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("collection").map_err(StoreError::from))
            .collect()
    }
}
