//! HTTP routes for workout record endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{
    create_record, delete_record, exercise_history, list_daily_records, list_record_days,
    update_record, WorkoutHandlers,
};

/// Creates the workout record router.
pub fn workout_routes(handlers: WorkoutHandlers) -> Router {
    Router::new()
        .route("/training_records", get(list_daily_records).post(create_record))
        .route("/training_records/days", get(list_record_days))
        .route("/training_records/:id", put(update_record).delete(delete_record))
        .route("/training_records/exercises/:exercise_id", get(exercise_history))
        .with_state(handlers)
}
