//! GetProfileHandler - Reads the caller's email and body metrics.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{User, UserError};
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub user_id: UserId,
}

pub struct GetProfileHandler {
    users: Arc<dyn UserRepository>,
}

impl GetProfileHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<User, UserError> {
        self.users
            .find_by_id(&query.user_id)
            .await?
            .ok_or(UserError::NotFound(query.user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::user::test_support::MockUserRepository;
    use crate::domain::user::Email;

    #[tokio::test]
    async fn returns_existing_user() {
        let user = User::register(Email::new("a@b.c").unwrap(), "hash".into());
        let handler = GetProfileHandler::new(Arc::new(MockUserRepository::with_user(user.clone())));

        let found = handler
            .handle(GetProfileQuery {
                user_id: *user.id(),
            })
            .await
            .unwrap();

        assert_eq!(found, user);
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let handler = GetProfileHandler::new(Arc::new(MockUserRepository::new()));
        let user_id = UserId::new();

        let result = handler.handle(GetProfileQuery { user_id }).await;

        assert_eq!(result.unwrap_err(), UserError::NotFound(user_id));
    }
}
