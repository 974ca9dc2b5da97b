//! HTTP adapter for the exercise list.

mod handlers;
mod routes;

pub use handlers::ExerciseHandlers;
pub use routes::exercise_routes;
