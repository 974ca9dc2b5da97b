//! HTTP routes for exercise endpoints.

use axum::{routing::get, Router};

use super::handlers::{list_exercises, ExerciseHandlers};

pub fn exercise_routes(handlers: ExerciseHandlers) -> Router {
    Router::new()
        .route("/exercises", get(list_exercises))
        .with_state(handlers)
}
