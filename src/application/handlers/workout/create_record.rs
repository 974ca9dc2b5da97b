//! CreateRecordHandler - Command handler for logging a workout record.

use std::sync::Arc;

use crate::domain::foundation::{RecordId, UserId};
use crate::domain::workout::{RecordDraft, WorkoutError, WorkoutRecord};
use crate::ports::WorkoutRepository;

#[derive(Debug, Clone)]
pub struct CreateRecordCommand {
    pub user_id: UserId,
    pub draft: RecordDraft,
}

#[derive(Debug, Clone)]
pub struct CreateRecordResult {
    pub record: WorkoutRecord,
}

pub struct CreateRecordHandler {
    repository: Arc<dyn WorkoutRepository>,
}

impl CreateRecordHandler {
    pub fn new(repository: Arc<dyn WorkoutRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateRecordCommand) -> Result<CreateRecordResult, WorkoutError> {
        let exercise_id = cmd.draft.exercise_id;

        // Set validation happens here, before the store is touched.
        let record = WorkoutRecord::new(RecordId::new(), cmd.user_id, cmd.draft)?;

        self.repository
            .create(&record)
            .await
            .map_err(|e| WorkoutError::from_store(e, *record.id(), exercise_id))?;

        tracing::info!(
            record_id = %record.id(),
            exercise_id = %exercise_id,
            sets = record.sets().len(),
            "workout_created"
        );

        Ok(CreateRecordResult { record })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::workout::test_support::{
        draft_with, InjectedFailure, MockWorkoutRepository,
    };
    use crate::domain::foundation::ExerciseId;
    use crate::domain::workout::SetInput;

    #[tokio::test]
    async fn creates_record_with_sets() {
        let repo = Arc::new(MockWorkoutRepository::new());
        let handler = CreateRecordHandler::new(repo.clone());
        let user_id = UserId::new();

        let result = handler
            .handle(CreateRecordCommand {
                user_id,
                draft: draft_with(
                    ExerciseId::new(),
                    vec![SetInput::new(1, 10, 60.0), SetInput::new(2, 8, 62.5)],
                ),
            })
            .await
            .unwrap();

        let stored = repo.records();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id(), result.record.id());
        assert_eq!(stored[0].user_id(), &user_id);
        assert_eq!(stored[0].sets().len(), 2);
    }

    #[tokio::test]
    async fn empty_sets_never_reach_store() {
        let repo = Arc::new(MockWorkoutRepository::new());
        let handler = CreateRecordHandler::new(repo.clone());

        let result = handler
            .handle(CreateRecordCommand {
                user_id: UserId::new(),
                draft: draft_with(ExerciseId::new(), vec![]),
            })
            .await;

        assert!(matches!(result, Err(WorkoutError::NoSets)));
        assert_eq!(repo.call_count(), 0);
    }

    #[tokio::test]
    async fn zero_reps_never_reach_store() {
        let repo = Arc::new(MockWorkoutRepository::new());
        let handler = CreateRecordHandler::new(repo.clone());

        let result = handler
            .handle(CreateRecordCommand {
                user_id: UserId::new(),
                draft: draft_with(ExerciseId::new(), vec![SetInput::new(1, 0, 60.0)]),
            })
            .await;

        assert!(matches!(result, Err(WorkoutError::InvalidSetValue(_))));
        assert_eq!(repo.call_count(), 0);
    }

    #[tokio::test]
    async fn unknown_exercise_is_reported() {
        let repo = Arc::new(MockWorkoutRepository::new());
        repo.fail_writes_with(InjectedFailure::ReferenceViolation);
        let handler = CreateRecordHandler::new(repo.clone());
        let exercise_id = ExerciseId::new();

        let result = handler
            .handle(CreateRecordCommand {
                user_id: UserId::new(),
                draft: draft_with(exercise_id, vec![SetInput::new(1, 5, 100.0)]),
            })
            .await;

        assert_eq!(result.unwrap_err(), WorkoutError::ExerciseNotFound(exercise_id));
        assert!(repo.records().is_empty());
    }

    #[tokio::test]
    async fn store_failure_is_infrastructure() {
        let repo = Arc::new(MockWorkoutRepository::new());
        repo.fail_writes_with(InjectedFailure::Database);
        let handler = CreateRecordHandler::new(repo);

        let result = handler
            .handle(CreateRecordCommand {
                user_id: UserId::new(),
                draft: draft_with(ExerciseId::new(), vec![SetInput::new(1, 5, 100.0)]),
            })
            .await;

        assert!(matches!(result, Err(WorkoutError::Infrastructure(_))));
    }
}
