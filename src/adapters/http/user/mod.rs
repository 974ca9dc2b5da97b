//! HTTP adapter for account, profile and home summary endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AuthResponse, CredentialsRequest, HomeSummaryResponse, ProfileResponse, UpdateProfileRequest,
};
pub use handlers::{handle_user_error, UserHandlers};
pub use routes::user_routes;
