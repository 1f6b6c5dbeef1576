#[cfg(test)]
mod tests {
    use crate::db::{DocumentStore, Filter, MemoryStore};
    use crate::routes::seed::DEMO_DATA_READY;
    use crate::seed::{seed_demo_data, SeedReport};
    use crate::test_utils::{create_test_app, memory_state, send_json};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_seed_populates_empty_store() {
        let store = MemoryStore::new();

        let report = seed_demo_data(&store).await.unwrap();

        assert_eq!(report, SeedReport { properties: 2, testimonials: 2 });
        assert_eq!(store.count("property", &Filter::new()).await.unwrap(), 2);
        assert_eq!(store.count("testimonial", &Filter::new()).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = MemoryStore::new();

        seed_demo_data(&store).await.unwrap();
        let second = seed_demo_data(&store).await.unwrap();

        assert_eq!(second, SeedReport::default());
        assert_eq!(store.count("property", &Filter::new()).await.unwrap(), 2);
        assert_eq!(store.count("testimonial", &Filter::new()).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_seed_guard_is_per_collection() {
        let store = MemoryStore::new();
        let existing = json!({"title": "Office", "price": 10});
        store
            .insert("property", existing.as_object().cloned().unwrap())
            .await
            .unwrap();

        let report = seed_demo_data(&store).await.unwrap();

        assert_eq!(report, SeedReport { properties: 0, testimonials: 2 });
        assert_eq!(store.count("property", &Filter::new()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_seed_endpoint_and_filtering_demo_data() {
        let app = create_test_app(memory_state());

        for _ in 0..2 {
            let (status, body) = send_json(&app, "POST", "/seed", None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["message"], DEMO_DATA_READY);
        }

        let (_, all) = send_json(&app, "GET", "/properties", None).await;
        assert_eq!(all.as_array().unwrap().len(), 2);

        let (_, cheap) = send_json(&app, "GET", "/properties?max_price=1000", None).await;
        let cheap = cheap.as_array().unwrap();
        assert_eq!(cheap.len(), 1);
        assert_eq!(cheap[0]["price"], 350.0);
        assert_eq!(cheap[0]["bedrooms"], 3);

        let (_, testimonials) = send_json(&app, "GET", "/testimonials", None).await;
        assert!(testimonials
            .as_array()
            .unwrap()
            .iter()
            .all(|t| t["rating"] == 5));
    }
}
