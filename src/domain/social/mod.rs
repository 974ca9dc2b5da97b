//! Social module - Likes on public workout records.
//!
//! Only public records can be liked or unliked. Both operations are
//! idempotent: liking twice keeps one like, unliking an absent like succeeds.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, RecordId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SocialError {
    #[error("Workout record not found: {0}")]
    RecordNotFound(RecordId),

    #[error("Workout record {0} is private")]
    PrivateRecord(RecordId),

    #[error("{0}")]
    Infrastructure(String),
}

impl SocialError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SocialError::RecordNotFound(_) => ErrorCode::RecordNotFound,
            SocialError::PrivateRecord(_) => ErrorCode::Forbidden,
            SocialError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for SocialError {
    fn from(err: DomainError) -> Self {
        SocialError::Infrastructure(err.message)
    }
}

/// Checks a record's visibility before a like/unlike.
///
/// `visibility` is the record's `is_public` flag, or `None` when the record
/// does not exist.
pub fn ensure_likeable(record_id: RecordId, visibility: Option<bool>) -> Result<(), SocialError> {
    match visibility {
        None => Err(SocialError::RecordNotFound(record_id)),
        Some(false) => Err(SocialError::PrivateRecord(record_id)),
        Some(true) => Ok(()),
    }
}
