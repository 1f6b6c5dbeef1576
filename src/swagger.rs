use axum::Router;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        Booking, ContactMessage, CreatedResponse, MessageResponse, Property, RootResponse,
        StoreProbeResponse, Testimonial,
    },
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::system::root,
        crate::routes::system::test_store,
        crate::routes::properties::list_properties,
        crate::routes::properties::get_property,
        crate::routes::bookings::create_booking,
        crate::routes::contact::create_contact_message,
        crate::routes::testimonials::list_testimonials,
        crate::routes::seed::seed_demo_data,
    ),
    components(
        schemas(
            Property, Booking, Testimonial, ContactMessage,
            CreatedResponse, MessageResponse, RootResponse, StoreProbeResponse
        )
    ),
    tags(
        (name = "properties", description = "Property listings"),
        (name = "bookings", description = "Booking requests"),
        (name = "contact", description = "Contact messages"),
        (name = "testimonials", description = "Customer testimonials"),
        (name = "system", description = "Liveness, store probe and demo data"),
    ),
    info(
        title = "Promparty Rent API",
        version = "0.1.0",
        description = "Backend for the Promparty Rent website"
    )
)]
pub struct ApiDoc;

pub fn create_swagger_router() -> Router<Arc<AppState>> {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
