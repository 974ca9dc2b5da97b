//! Workout module - Training records and their sets.
//!
//! A `WorkoutRecord` is one exercise performed on one calendar day by one
//! user. Its sets are replaced wholesale on every update.

mod errors;
mod record;

pub use errors::WorkoutError;
pub use record::{validate_sets, RecordDraft, SetInput, WorkoutRecord, WorkoutSet};
