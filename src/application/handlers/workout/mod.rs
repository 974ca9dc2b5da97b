//! Workout handlers.
//!
//! ## Commands
//! - Create a record with its sets
//! - Replace a record and all of its sets
//! - Delete a record
//!
//! ## Queries
//! - Records of one day
//! - Training days of one month
//! - Set history of one exercise

mod create_record;
mod delete_record;
mod get_daily_records;
mod get_exercise_history;
mod get_record_days;
mod update_record;

#[cfg(test)]
pub(crate) mod test_support;

// Commands
pub use create_record::{CreateRecordCommand, CreateRecordHandler, CreateRecordResult};
pub use delete_record::{DeleteRecordCommand, DeleteRecordHandler};
pub use update_record::{UpdateRecordCommand, UpdateRecordHandler, UpdateRecordResult};

// Queries
pub use get_daily_records::{GetDailyRecordsHandler, GetDailyRecordsQuery};
pub use get_exercise_history::{GetExerciseHistoryHandler, GetExerciseHistoryQuery};
pub use get_record_days::{GetRecordDaysHandler, GetRecordDaysQuery};
