//! HTTP handlers for exercise endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::internal_error;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::exercise::ListExercisesHandler;

#[derive(Clone)]
pub struct ExerciseHandlers {
    list_handler: Arc<ListExercisesHandler>,
}

impl ExerciseHandlers {
    pub fn new(list_handler: Arc<ListExercisesHandler>) -> Self {
        Self { list_handler }
    }
}

/// GET /exercises - All exercises ordered by name
pub async fn list_exercises(
    State(handlers): State<ExerciseHandlers>,
    RequireAuth(_user): RequireAuth,
) -> Response {
    match handlers.list_handler.handle().await {
        Ok(exercises) => (StatusCode::OK, Json(exercises)).into_response(),
        Err(e) => internal_error(e),
    }
}
