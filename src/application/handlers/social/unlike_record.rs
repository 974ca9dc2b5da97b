//! UnlikeRecordHandler - Removes a like from a public workout record.

use std::sync::Arc;

use crate::domain::foundation::{RecordId, UserId};
use crate::domain::social::{ensure_likeable, SocialError};
use crate::ports::LikeRepository;

#[derive(Debug, Clone)]
pub struct UnlikeRecordCommand {
    pub user_id: UserId,
    pub record_id: RecordId,
}

pub struct UnlikeRecordHandler {
    repository: Arc<dyn LikeRepository>,
}

impl UnlikeRecordHandler {
    pub fn new(repository: Arc<dyn LikeRepository>) -> Self {
        Self { repository }
    }

    /// Idempotent: unliking a record that was never liked succeeds.
    pub async fn handle(&self, cmd: UnlikeRecordCommand) -> Result<(), SocialError> {
        let visibility = self.repository.is_record_public(&cmd.record_id).await?;
        ensure_likeable(cmd.record_id, visibility)?;

        self.repository.delete_like(&cmd.user_id, &cmd.record_id).await?;

        tracing::info!(record_id = %cmd.record_id, user_id = %cmd.user_id, "workout_unliked");
        Ok(())
    }
}
