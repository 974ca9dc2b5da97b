//! Shared mocks for user handler tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::{BodyMetrics, Email, User};
use crate::ports::UserRepository;

#[derive(Default)]
pub struct MockUserRepository {
    users: Mutex<Vec<User>>,
    pub creates: Mutex<usize>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(user: User) -> Self {
        let repo = Self::default();
        repo.users.lock().unwrap().push(user);
        repo
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        *self.creates.lock().unwrap() += 1;
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email() == user.email()) {
            return Err(DomainError::new(ErrorCode::UniqueViolation, "users_email_key"));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email() == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id() == id)
            .cloned())
    }

    async fn update_metrics(&self, id: &UserId, metrics: &BodyMetrics) -> Result<(), DomainError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id() == id)
            .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, "no row updated"))?;
        *user = User::reconstitute(
            *user.id(),
            user.email().clone(),
            user.password_hash().to_string(),
            *metrics,
            *user.created_at(),
            *user.updated_at(),
        );
        Ok(())
    }
}
