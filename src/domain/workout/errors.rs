//! Workout-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ExerciseId, RecordId, ValidationError};

/// Errors raised by workout record operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    /// Create/update was called with an empty set list.
    #[error("At least one set is required")]
    NoSets,

    /// A set carried a non-positive set number or reps, or a negative weight.
    #[error("Invalid set value: {0}")]
    InvalidSetValue(ValidationError),

    /// A non-set input (date, month) failed validation.
    #[error("Validation failed: {0}")]
    ValidationFailed(ValidationError),

    /// The referenced exercise does not exist.
    #[error("Exercise not found: {0}")]
    ExerciseNotFound(ExerciseId),

    /// The record does not exist or is not owned by the caller.
    #[error("Workout record not found: {0}")]
    RecordNotFound(RecordId),

    /// Store failure, wrapped with the operation that failed.
    #[error("{0}")]
    Infrastructure(String),
}

impl WorkoutError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        WorkoutError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            WorkoutError::NoSets
            | WorkoutError::InvalidSetValue(_)
            | WorkoutError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            WorkoutError::ExerciseNotFound(_) => ErrorCode::ExerciseNotFound,
            WorkoutError::RecordNotFound(_) => ErrorCode::RecordNotFound,
            WorkoutError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Translates a store error raised while touching `record_id` / `exercise_id`.
    ///
    /// A reference violation can only come from the exercise foreign key, so it
    /// becomes `ExerciseNotFound`; everything else stays opaque.
    pub fn from_store(err: DomainError, record_id: RecordId, exercise_id: ExerciseId) -> Self {
        match err.code {
            ErrorCode::ReferenceViolation | ErrorCode::ExerciseNotFound => {
                WorkoutError::ExerciseNotFound(exercise_id)
            }
            ErrorCode::RecordNotFound => WorkoutError::RecordNotFound(record_id),
            _ => WorkoutError::Infrastructure(err.message),
        }
    }
}

impl From<DomainError> for WorkoutError {
    fn from(err: DomainError) -> Self {
        WorkoutError::Infrastructure(err.message)
    }
}
