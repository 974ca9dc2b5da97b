//! LoginHandler - Verifies credentials and issues an access token.

use std::sync::Arc;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::user::{Email, Password, UserError};
use crate::ports::{PasswordHasher, TokenIssuer, UserRepository};

use super::AuthResult;

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl LoginHandler {
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

    /// Unknown email and wrong password both yield `InvalidCredentials`.
    pub async fn handle(&self, cmd: LoginCommand) -> Result<AuthResult, UserError> {
        let email = Email::new(cmd.email)?;
        let password = Password::new(cmd.password)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.hasher.verify(password.expose(), user.password_hash())? {
            tracing::warn!(user_id = %user.id(), "auth_login_rejected");
            return Err(UserError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(&AuthenticatedUser::new(*user.id(), user.email().as_str()))
            .map_err(|e| UserError::infrastructure(e.to_string()))?;

        tracing::info!(user_id = %user.id(), "auth_login_success");

        Ok(AuthResult {
            user_id: *user.id(),
            email: user.email().clone(),
            token,
        })
    }
}
