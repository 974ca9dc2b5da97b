//! DeleteRecordHandler - Removes a workout record owned by the caller.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, RecordId, UserId};
use crate::domain::workout::WorkoutError;
use crate::ports::WorkoutRepository;

#[derive(Debug, Clone)]
pub struct DeleteRecordCommand {
    pub user_id: UserId,
    pub record_id: RecordId,
}

pub struct DeleteRecordHandler {
    repository: Arc<dyn WorkoutRepository>,
}

impl DeleteRecordHandler {
    pub fn new(repository: Arc<dyn WorkoutRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteRecordCommand) -> Result<(), WorkoutError> {
        self.repository
            .find_by_id_and_user(&cmd.record_id, &cmd.user_id)
            .await?
            .ok_or(WorkoutError::RecordNotFound(cmd.record_id))?;

        self.repository
            .delete(&cmd.record_id, &cmd.user_id)
            .await
            .map_err(|e| match e.code {
                ErrorCode::RecordNotFound => WorkoutError::RecordNotFound(cmd.record_id),
                _ => WorkoutError::from(e),
            })?;

        tracing::info!(record_id = %cmd.record_id, "workout_deleted");
        Ok(())
    }
}
