use serde::Serialize;
use validator::Validate;

pub mod booking;
pub mod contact;
pub mod property;
pub mod responses;
pub mod testimonial;

pub use booking::*;
pub use contact::*;
pub use property::*;
pub use responses::*;
pub use testimonial::*;

/// A record kind persisted in its own collection.
pub trait Record: Serialize + Validate + Send + Sync {
    /// Collection name, the lowercase record kind.
    const COLLECTION: &'static str;
}
