use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Property {
    /// Listing title
    pub title: String,
    /// City the property is located in
    pub city: String,
    /// Kind of property (apartment, villa, office, hall)
    #[serde(rename = "type")]
    pub property_type: String,
    /// Price per `price_unit`
    #[validate(range(min = 0.0, message = "price must be greater than or equal to 0"))]
    pub price: f64,
    /// Billing period, e.g. per day or per month
    pub price_unit: String,
    /// Floor area in square meters
    pub size: Option<i32>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    /// Image links
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Link to the location on a map
    pub location_map: Option<String>,
    pub description: Option<String>,
}

impl Record for Property {
    const COLLECTION: &'static str = "property";
}
