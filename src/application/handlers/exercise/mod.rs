//! Exercise handlers.

mod list_exercises;

pub use list_exercises::ListExercisesHandler;
