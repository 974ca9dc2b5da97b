//! LikeRecordHandler - Likes a public workout record.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, RecordId, UserId};
use crate::domain::social::{ensure_likeable, SocialError};
use crate::ports::LikeRepository;

#[derive(Debug, Clone)]
pub struct LikeRecordCommand {
    pub user_id: UserId,
    pub record_id: RecordId,
}

pub struct LikeRecordHandler {
    repository: Arc<dyn LikeRepository>,
}

impl LikeRecordHandler {
    pub fn new(repository: Arc<dyn LikeRepository>) -> Self {
        Self { repository }
    }

    /// Idempotent: liking an already-liked record succeeds.
    pub async fn handle(&self, cmd: LikeRecordCommand) -> Result<(), SocialError> {
        let visibility = self.repository.is_record_public(&cmd.record_id).await?;
        ensure_likeable(cmd.record_id, visibility)?;

        // The record can disappear between the visibility check and the insert.
        self.repository
            .create_like(&cmd.user_id, &cmd.record_id)
            .await
            .map_err(|e| match e.code {
                ErrorCode::ReferenceViolation => SocialError::RecordNotFound(cmd.record_id),
                _ => SocialError::from(e),
            })?;

        tracing::info!(record_id = %cmd.record_id, user_id = %cmd.user_id, "workout_liked");
        Ok(())
    }
}
