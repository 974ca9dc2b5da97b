//! Exercise reference data port.

use async_trait::async_trait;

use crate::domain::exercise::Exercise;
use crate::domain::foundation::DomainError;

#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// All exercises, ordered by name.
    async fn list(&self) -> Result<Vec<Exercise>, DomainError>;

    /// Insert each name that does not exist yet.
    ///
    /// Idempotent. Returns the number of exercises actually inserted.
    async fn seed(&self, names: &[&str]) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exercise_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ExerciseRepository) {}
    }
}
