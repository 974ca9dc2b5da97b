//! Like repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RecordId, UserId};

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// The record's `is_public` flag, or `None` if the record does not exist.
    async fn is_record_public(&self, record_id: &RecordId) -> Result<Option<bool>, DomainError>;

    /// Record that `user_id` likes `record_id`. Succeeds if the like exists.
    async fn create_like(&self, user_id: &UserId, record_id: &RecordId) -> Result<(), DomainError>;

    /// Remove the like. Succeeds if there was nothing to remove.
    async fn delete_like(&self, user_id: &UserId, record_id: &RecordId) -> Result<(), DomainError>;
}
