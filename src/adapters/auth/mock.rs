//! Test doubles for the auth ports.
//!
//! `MockSessionValidator` issues opaque tokens and remembers who they
//! belong to, so it can stand in for both `TokenIssuer` and
//! `SessionValidator`. `PlaintextPasswordHasher` skips the key derivation
//! cost of argon2.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::foundation::{AccessToken, AuthError, AuthenticatedUser, DomainError};
use crate::domain::user::Password;
use crate::ports::{PasswordHasher, SessionValidator, TokenIssuer};

/// In-memory token table.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token that maps to `user`.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.add_token(token, user);
        self
    }

    /// Forces every validation to fail with `error`.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap_or_else(PoisonError::into_inner) = Some(error);
        self
    }

    pub fn add_token(&self, token: impl Into<String>, user: AuthenticatedUser) {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.into(), user);
    }

    pub fn remove_token(&self, token: &str) {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token);
    }

    pub fn token_count(&self) -> usize {
        self.tokens.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl TokenIssuer for MockSessionValidator {
    fn issue(&self, user: &AuthenticatedUser) -> Result<AccessToken, AuthError> {
        let token = format!("mock-{}", Uuid::new_v4());
        self.add_token(token.clone(), user.clone());
        Ok(AccessToken::new(token))
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self
            .force_error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

/// Reversible "hash" for tests; never use outside them.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextPasswordHasher;

const PLAINTEXT_PREFIX: &str = "plain$";

impl PasswordHasher for PlaintextPasswordHasher {
    fn hash(&self, password: &Password) -> Result<String, DomainError> {
        Ok(format!("{}{}", PLAINTEXT_PREFIX, password.expose()))
    }

    fn verify(&self, candidate: &str, stored_hash: &str) -> Result<bool, DomainError> {
        Ok(stored_hash.strip_prefix(PLAINTEXT_PREFIX) == Some(candidate))
    }
}
