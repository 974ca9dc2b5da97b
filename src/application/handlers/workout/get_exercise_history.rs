//! GetExerciseHistoryHandler - Flat set history for one exercise.

use std::sync::Arc;

use crate::domain::foundation::{ExerciseId, UserId};
use crate::domain::workout::WorkoutError;
use crate::ports::{ExerciseSetView, WorkoutReader};

#[derive(Debug, Clone)]
pub struct GetExerciseHistoryQuery {
    pub user_id: UserId,
    pub exercise_id: ExerciseId,
}

pub struct GetExerciseHistoryHandler {
    reader: Arc<dyn WorkoutReader>,
}

impl GetExerciseHistoryHandler {
    pub fn new(reader: Arc<dyn WorkoutReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetExerciseHistoryQuery,
    ) -> Result<Vec<ExerciseSetView>, WorkoutError> {
        let rows = self
            .reader
            .find_exercise_history(&query.user_id, &query.exercise_id)
            .await?;

        tracing::info!(
            exercise_id = %query.exercise_id,
            count = rows.len(),
            "workout_exercise_sets_fetched"
        );
        Ok(rows)
    }
}
