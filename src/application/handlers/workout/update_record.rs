//! UpdateRecordHandler - Replaces a workout record and all of its sets.
//!
//! The caller resends the full desired state. Sets are validated before any
//! store access; the replace itself is a single atomic repository call.

use std::sync::Arc;

use crate::domain::foundation::{RecordId, UserId};
use crate::domain::workout::{validate_sets, RecordDraft, WorkoutError, WorkoutRecord};
use crate::ports::WorkoutRepository;

#[derive(Debug, Clone)]
pub struct UpdateRecordCommand {
    pub user_id: UserId,
    pub record_id: RecordId,
    pub draft: RecordDraft,
}

#[derive(Debug, Clone)]
pub struct UpdateRecordResult {
    pub record: WorkoutRecord,
}

pub struct UpdateRecordHandler {
    repository: Arc<dyn WorkoutRepository>,
}

impl UpdateRecordHandler {
    pub fn new(repository: Arc<dyn WorkoutRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateRecordCommand) -> Result<UpdateRecordResult, WorkoutError> {
        validate_sets(&cmd.draft.sets)?;

        let exercise_id = cmd.draft.exercise_id;

        // 1. Ownership-scoped lookup
        let mut record = self
            .repository
            .find_by_id_and_user(&cmd.record_id, &cmd.user_id)
            .await?
            .ok_or(WorkoutError::RecordNotFound(cmd.record_id))?;

        // 2. Replace in memory (fresh set ids)
        record.replace(cmd.draft)?;

        // 3. Persist atomically
        self.repository
            .update(&record)
            .await
            .map_err(|e| WorkoutError::from_store(e, cmd.record_id, exercise_id))?;

        tracing::info!(
            record_id = %cmd.record_id,
            exercise_id = %exercise_id,
            sets = record.sets().len(),
            "workout_updated"
        );

        Ok(UpdateRecordResult { record })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::workout::test_support::{
        day, draft_with, persisted_record, InjectedFailure, MockWorkoutRepository,
    };
    use crate::domain::foundation::{ExerciseId, SetId};
    use crate::domain::workout::SetInput;

    fn command(record: &WorkoutRecord, draft: RecordDraft) -> UpdateRecordCommand {
        UpdateRecordCommand {
            user_id: *record.user_id(),
            record_id: *record.id(),
            draft,
        }
    }

    #[tokio::test]
    async fn replaces_sets_and_scalars() {
        // Two sets (10×40, 8×45) become one set (8×50) on a new date.
        let user_id = UserId::new();
        let original = persisted_record(
            user_id,
            vec![SetInput::new(1, 10, 40.0), SetInput::new(2, 8, 45.0)],
        );
        let old_set_ids: Vec<SetId> = original.sets().iter().map(|s| s.id).collect();
        let repo = Arc::new(MockWorkoutRepository::with_record(original.clone()));
        let handler = UpdateRecordHandler::new(repo.clone());

        let mut draft = draft_with(*original.exercise_id(), vec![SetInput::new(1, 8, 50.0)]);
        draft.trained_on = day(2025, 10, 2);
        draft.body_weight = 71.2;
        handler.handle(command(&original, draft)).await.unwrap();

        let stored = repo.records();
        assert_eq!(stored.len(), 1);
        let updated = &stored[0];
        assert_eq!(updated.sets().len(), 1);
        assert_eq!(updated.sets()[0].reps, 8);
        assert_eq!(updated.sets()[0].weight, 50.0);
        assert!(!old_set_ids.contains(&updated.sets()[0].id));
        assert_eq!(updated.trained_on(), day(2025, 10, 2));
        assert_eq!(updated.body_weight(), 71.2);
    }

    #[tokio::test]
    async fn empty_sets_never_reach_store() {
        let original = persisted_record(UserId::new(), vec![SetInput::new(1, 5, 50.0)]);
        let repo = Arc::new(MockWorkoutRepository::with_record(original.clone()));
        let handler = UpdateRecordHandler::new(repo.clone());

        let result = handler
            .handle(command(&original, draft_with(ExerciseId::new(), vec![])))
            .await;

        assert!(matches!(result, Err(WorkoutError::NoSets)));
        assert_eq!(repo.call_count(), 0);
    }

    #[tokio::test]
    async fn zero_reps_never_reach_store() {
        let original = persisted_record(UserId::new(), vec![SetInput::new(1, 5, 50.0)]);
        let repo = Arc::new(MockWorkoutRepository::with_record(original.clone()));
        let handler = UpdateRecordHandler::new(repo.clone());

        let result = handler
            .handle(command(
                &original,
                draft_with(ExerciseId::new(), vec![SetInput::new(1, 0, 50.0)]),
            ))
            .await;

        assert!(matches!(result, Err(WorkoutError::InvalidSetValue(_))));
        assert_eq!(repo.call_count(), 0);
    }

    #[tokio::test]
    async fn someone_elses_record_is_not_found() {
        let original = persisted_record(UserId::new(), vec![SetInput::new(1, 5, 50.0)]);
        let repo = Arc::new(MockWorkoutRepository::with_record(original.clone()));
        let handler = UpdateRecordHandler::new(repo.clone());

        let mut cmd = command(
            &original,
            draft_with(ExerciseId::new(), vec![SetInput::new(1, 5, 55.0)]),
        );
        cmd.user_id = UserId::new();

        let result = handler.handle(cmd).await;

        assert_eq!(result.unwrap_err(), WorkoutError::RecordNotFound(*original.id()));
        assert_eq!(repo.records()[0], original);
    }

    #[tokio::test]
    async fn dangling_exercise_leaves_record_unchanged() {
        let original = persisted_record(UserId::new(), vec![SetInput::new(1, 5, 50.0)]);
        let repo = Arc::new(MockWorkoutRepository::with_record(original.clone()));
        repo.fail_writes_with(InjectedFailure::ReferenceViolation);
        let handler = UpdateRecordHandler::new(repo.clone());
        let missing_exercise = ExerciseId::new();

        let result = handler
            .handle(command(
                &original,
                draft_with(missing_exercise, vec![SetInput::new(1, 6, 52.5)]),
            ))
            .await;

        assert_eq!(result.unwrap_err(), WorkoutError::ExerciseNotFound(missing_exercise));
        assert_eq!(repo.records()[0], original);
    }

    #[tokio::test]
    async fn store_failure_is_wrapped() {
        let original = persisted_record(UserId::new(), vec![SetInput::new(1, 5, 50.0)]);
        let repo = Arc::new(MockWorkoutRepository::with_record(original.clone()));
        repo.fail_writes_with(InjectedFailure::Database);
        let handler = UpdateRecordHandler::new(repo);

        let result = handler
            .handle(command(
                &original,
                draft_with(*original.exercise_id(), vec![SetInput::new(1, 6, 52.5)]),
            ))
            .await;

        match result {
            Err(WorkoutError::Infrastructure(msg)) => {
                assert!(msg.starts_with("Failed to update workout record"))
            }
            other => panic!("expected infrastructure error, got {:?}", other),
        }
    }
}
