//! User account error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UserError {
    #[error("Validation failed: {0}")]
    ValidationFailed(ValidationError),

    #[error("User already exists: {0}")]
    AlreadyExists(String),

    /// Unknown email or wrong password. Deliberately indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not found: {0}")]
    NotFound(UserId),

    #[error("{0}")]
    Infrastructure(String),
}

impl UserError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        UserError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            UserError::AlreadyExists(_) => ErrorCode::UniqueViolation,
            UserError::InvalidCredentials => ErrorCode::Unauthorized,
            UserError::NotFound(_) => ErrorCode::UserNotFound,
            UserError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for UserError {
    fn from(err: ValidationError) -> Self {
        UserError::ValidationFailed(err)
    }
}

impl From<DomainError> for UserError {
    fn from(err: DomainError) -> Self {
        UserError::Infrastructure(err.message)
    }
}
