#[cfg(test)]
mod tests {
    use crate::errors::{ApiError, AppError, StoreError};
    use crate::models::{Booking, Property};
    use crate::routes::parse_json;
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::{json, Value};

    async fn response_body(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::validation(Some("price"), "bad").status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            ApiError::MalformedIdentifier { value: "x".to_string() }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::not_found("Property").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(StoreError::NotAnObject { collection: "property".to_string() }).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_field_is_reported() {
        let body = json!({
            "property_id": "p1",
            "name": "Sara",
            "start_date": "2024-05-01",
            "end_date": "2024-05-10"
        });

        let api_error = parse_json::<Booking>(body.to_string().as_bytes()).unwrap_err();
        assert_eq!(api_error.field(), Some("phone"));
        assert_eq!(api_error.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_type_mismatch_names_the_field() {
        let body = json!({
            "property_id": 42,
            "name": "Sara",
            "phone": "0910000000",
            "start_date": "2024-05-01",
            "end_date": "2024-05-10"
        });

        let api_error = parse_json::<Booking>(body.to_string().as_bytes()).unwrap_err();
        assert_eq!(api_error.field(), Some("property_id"));
        assert!(api_error.user_message().contains("invalid type"));
    }

    #[test]
    fn test_list_element_mismatch_names_the_path() {
        let body = json!({
            "title": "Villa",
            "city": "Benghazi",
            "type": "villa",
            "price": 10,
            "price_unit": "month",
            "images": ["a.jpg", 2]
        });

        let api_error = parse_json::<Property>(body.to_string().as_bytes()).unwrap_err();
        assert_eq!(api_error.field(), Some("images[1]"));
    }

    #[test]
    fn test_trailing_data_is_rejected() {
        let result = parse_json::<serde_json::Value>(br#"{"name": "Omar"} extra"#);
        assert!(matches!(result, Err(ApiError::Validation { field: None, .. })));
    }

    #[tokio::test]
    async fn test_validation_response_carries_field() {
        let (status, body) = response_body(ApiError::validation(Some("rating"), "rating must be between 1 and 5")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["field"], "rating");
        assert_eq!(body["status"], 422);
        assert_eq!(body["error"], "rating must be between 1 and 5");
    }

    #[tokio::test]
    async fn test_store_failure_hides_details() {
        let (status, body) =
            response_body(StoreError::NotAnObject { collection: "property".to_string() }.into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "An internal error occurred");
        assert!(body.get("field").is_none());
    }
}
