use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    #[error("Invalid ranking period: {0}")]
    InvalidPeriod(ValidationError),

    #[error("{0}")]
    Infrastructure(String),
}

impl RankingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RankingError::InvalidPeriod(_) => ErrorCode::ValidationFailed,
            RankingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for RankingError {
    fn from(err: ValidationError) -> Self {
        RankingError::InvalidPeriod(err)
    }
}

impl From<DomainError> for RankingError {
    fn from(err: DomainError) -> Self {
        RankingError::Infrastructure(err.message)
    }
}
