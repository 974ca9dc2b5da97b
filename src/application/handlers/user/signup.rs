//! SignupHandler - Registers an account and issues its first access token.

use std::sync::Arc;

use crate::domain::foundation::{AccessToken, AuthenticatedUser, ErrorCode, UserId};
use crate::domain::user::{Email, Password, User, UserError};
use crate::ports::{PasswordHasher, TokenIssuer, UserRepository};

#[derive(Debug, Clone)]
pub struct SignupCommand {
    pub email: String,
    pub password: String,
}

/// Identity and token returned by signup and login.
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub user_id: UserId,
    pub email: Email,
    pub token: AccessToken,
}

pub struct SignupHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl SignupHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    pub async fn handle(&self, cmd: SignupCommand) -> Result<AuthResult, UserError> {
        let email = Email::new(cmd.email)?;
        let password = Password::new(cmd.password)?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(UserError::AlreadyExists(email.to_string()));
        }

        let hash = self.hasher.hash(&password)?;
        let user = User::register(email, hash);

        // A concurrent signup can still win the race; the unique index decides.
        self.users.create(&user).await.map_err(|e| match e.code {
            ErrorCode::UniqueViolation => UserError::AlreadyExists(user.email().to_string()),
            _ => UserError::from(e),
        })?;

        let token = self
            .tokens
            .issue(&AuthenticatedUser::new(*user.id(), user.email().as_str()))
            .map_err(|e| UserError::infrastructure(e.to_string()))?;

        tracing::info!(user_id = %user.id(), "auth_signup_success");

        Ok(AuthResult {
            user_id: *user.id(),
            email: user.email().clone(),
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::{MockSessionValidator, PlaintextPasswordHasher};
    use crate::application::handlers::user::test_support::MockUserRepository;
    use crate::ports::SessionValidator;

    fn handler(
        users: Arc<MockUserRepository>,
        tokens: Arc<MockSessionValidator>,
    ) -> SignupHandler {
        SignupHandler::new(users, Arc::new(PlaintextPasswordHasher), tokens)
    }

    #[tokio::test]
    async fn registers_user_and_issues_valid_token() {
        let users = Arc::new(MockUserRepository::new());
        let tokens = Arc::new(MockSessionValidator::new());
        let handler = handler(users.clone(), tokens.clone());

        let result = handler
            .handle(SignupCommand {
                email: "new@example.com".into(),
                password: "secret1".into(),
            })
            .await
            .unwrap();

        let stored = users.users();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].email().as_str(), "new@example.com");
        assert_ne!(stored[0].password_hash(), "secret1");

        let authenticated = tokens.validate(result.token.as_str()).await.unwrap();
        assert_eq!(authenticated.id, result.user_id);
    }

    #[tokio::test]
    async fn duplicate_email_is_conflict() {
        let users = Arc::new(MockUserRepository::new());
        let handler = handler(users.clone(), Arc::new(MockSessionValidator::new()));
        let cmd = SignupCommand {
            email: "dup@example.com".into(),
            password: "secret1".into(),
        };

        handler.handle(cmd.clone()).await.unwrap();
        let result = handler.handle(cmd).await;

        assert_eq!(
            result.unwrap_err(),
            UserError::AlreadyExists("dup@example.com".into())
        );
        assert_eq!(users.users().len(), 1);
    }

    #[tokio::test]
    async fn short_password_is_rejected_before_store() {
        let users = Arc::new(MockUserRepository::new());
        let handler = handler(users.clone(), Arc::new(MockSessionValidator::new()));

        let result = handler
            .handle(SignupCommand {
                email: "a@example.com".into(),
                password: "12345".into(),
            })
            .await;

        assert!(matches!(result, Err(UserError::ValidationFailed(_))));
        assert_eq!(*users.creates.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn email_without_at_sign_is_rejected() {
        let handler = handler(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockSessionValidator::new()),
        );

        let result = handler
            .handle(SignupCommand {
                email: "not-an-email".into(),
                password: "secret1".into(),
            })
            .await;

        assert!(matches!(result, Err(UserError::ValidationFailed(_))));
    }
}
