//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, auth types and error types
//! that form the vocabulary of the workout domain.

mod auth;
mod errors;
mod ids;
mod month;
mod timestamp;

pub use auth::{AccessToken, AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ExerciseId, RecordId, SetId, UserId};
pub use month::CalendarMonth;
pub use timestamp::Timestamp;
