//! HTTP routes for social endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{like_record, timeline, unlike_record, SocialHandlers};

pub fn social_routes(handlers: SocialHandlers) -> Router {
    Router::new()
        .route("/timeline", get(timeline))
        .route("/records/:record_id/like", post(like_record).delete(unlike_record))
        .with_state(handlers)
}
