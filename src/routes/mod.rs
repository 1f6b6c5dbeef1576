use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub mod bookings;
pub mod contact;
pub mod extract;
pub mod properties;
pub mod seed;
pub mod system;
pub mod testimonials;

pub use extract::{parse_json, ValidatedJson, ValidatedQuery};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(system::root))
        .route("/test", get(system::test_store))
        .route("/properties", get(properties::list_properties))
        .route("/properties/{id}", get(properties::get_property))
        .route("/book", post(bookings::create_booking))
        .route("/contact", post(contact::create_contact_message))
        .route("/testimonials", get(testimonials::list_testimonials))
        .route("/seed", post(seed::seed_demo_data))
}
