use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use utoipa::IntoParams;

use super::ValidatedQuery;
use crate::{
    db::{normalize_all, DocumentId, Filter},
    errors::ApiError,
    models::{Property, Record},
    AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PropertyQuery {
    /// Exact city match
    pub city: Option<String>,
    /// Exact property type match
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    /// Lowest accepted price, inclusive
    pub min_price: Option<f64>,
    /// Highest accepted price, inclusive
    pub max_price: Option<f64>,
}

impl PropertyQuery {
    /// Builds the listing filter. Price bounds must be finite numbers.
    pub fn to_filter(&self) -> Result<Filter, ApiError> {
        for (name, bound) in [("min_price", self.min_price), ("max_price", self.max_price)] {
            if bound.is_some_and(|b| !b.is_finite()) {
                return Err(ApiError::validation(Some(name), format!("{} must be a finite number", name)));
            }
        }

        Ok(Filter::new()
            .eq_if_present("city", self.city.as_deref())
            .eq_if_present("type", self.property_type.as_deref())
            .range("price", self.min_price, self.max_price))
    }
}

#[utoipa::path(
    get,
    path = "/properties",
    tag = "properties",
    params(PropertyQuery),
    responses(
        (status = 200, description = "Matching properties, each with a string `id`", body = Vec<Property>),
        (status = 422, description = "Invalid query parameter")
    )
)]
pub async fn list_properties(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(query): ValidatedQuery<PropertyQuery>,
) -> Result<Json<Vec<Map<String, Value>>>, ApiError> {
    let filter = query.to_filter()?;
    let documents = state.store.find(Property::COLLECTION, &filter, None).await?;
    Ok(Json(normalize_all(documents)))
}

#[utoipa::path(
    get,
    path = "/properties/{id}",
    tag = "properties",
    params(
        ("id" = String, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Property details with a string `id`", body = Property),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Property not found")
    )
)]
pub async fn get_property(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Map<String, Value>>, ApiError> {
    let id: DocumentId = raw_id.parse()?;

    match state.store.find_one(Property::COLLECTION, id).await? {
        Some(document) => Ok(Json(document.normalize())),
        None => Err(ApiError::not_found("Property")),
    }
}
