//! HTTP routes for user endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_profile, home_summary, login, signup, update_profile, UserHandlers,
};

/// Account, profile and home summary routes.
pub fn user_routes(handlers: UserHandlers) -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/profile", get(get_profile).put(update_profile))
        .route("/home/summary", get(home_summary))
        .with_state(handlers)
}
