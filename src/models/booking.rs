use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Record;

/// A booking request. `property_id` is stored as given and not checked
/// against the property collection; the dates are opaque strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Booking {
    pub property_id: String,
    /// Full name of the requester
    pub name: String,
    pub phone: String,
    /// ISO start date
    pub start_date: String,
    /// ISO end date
    pub end_date: String,
    pub notes: Option<String>,
}

impl Record for Booking {
    const COLLECTION: &'static str = "booking";
}
