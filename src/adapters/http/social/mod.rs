//! HTTP adapter for the public timeline and likes.

mod dto;
mod handlers;
mod routes;

pub use dto::{LikeResponse, TimelineEntryResponse};
pub use handlers::{handle_social_error, SocialHandlers};
pub use routes::social_routes;
