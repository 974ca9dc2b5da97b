//! ListExercisesHandler - Exercise picker contents.

use std::sync::Arc;

use crate::domain::exercise::Exercise;
use crate::domain::foundation::DomainError;
use crate::ports::ExerciseRepository;

pub struct ListExercisesHandler {
    repository: Arc<dyn ExerciseRepository>,
}

impl ListExercisesHandler {
    pub fn new(repository: Arc<dyn ExerciseRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Exercise>, DomainError> {
        let exercises = self.repository.list().await?;
        tracing::info!(count = exercises.len(), "exercises_fetched");
        Ok(exercises)
    }
}
