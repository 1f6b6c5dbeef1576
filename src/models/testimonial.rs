use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Testimonial {
    /// Customer name
    pub name: String,
    pub city: Option<String>,
    /// Rating from 1 to 5
    #[serde(default = "default_rating")]
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,
    /// Customer feedback
    pub content: String,
}

fn default_rating() -> i32 {
    5
}

impl Record for Testimonial {
    const COLLECTION: &'static str = "testimonial";
}
