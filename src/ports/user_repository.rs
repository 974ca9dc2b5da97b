//! User repository port.
//!
//! Persists user accounts and their body metrics. Email uniqueness is
//! enforced by the store.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{BodyMetrics, Email, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a newly registered user.
    ///
    /// # Errors
    ///
    /// - `UniqueViolation` if the email is already taken
    /// - `DatabaseError` on persistence failure
    async fn create(&self, user: &User) -> Result<(), DomainError>;

    /// Returns `None` if no user has this email.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError>;

    /// Returns `None` if the user does not exist.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Overwrite height and goal weight. `None` values clear the column.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if no row was updated
    /// - `DatabaseError` on persistence failure
    async fn update_metrics(&self, id: &UserId, metrics: &BodyMetrics) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
