//! HTTP adapter for workout record endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    DailyQuery, DailyRecordResponse, ExerciseSetResponse, RecordCommandResponse, RecordDaysQuery,
    RecordRequest, SetPayload,
};
pub use handlers::{handle_workout_error, WorkoutHandlers};
pub use routes::workout_routes;
