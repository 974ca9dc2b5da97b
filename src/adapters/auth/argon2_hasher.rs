//! Argon2id password hashing.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::user::Password;
use crate::ports::PasswordHasher;

/// Produces PHC strings (`$argon2id$v=19$...`) with a random salt per hash.
#[derive(Debug, Default, Clone)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &Password) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.expose().as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::new(ErrorCode::InternalError, format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, candidate: &str, stored_hash: &str) -> Result<bool, DomainError> {
        let parsed = PasswordHash::new(stored_hash).map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Stored password hash is unreadable: {}", e))
        })?;

        match self.argon2.verify_password(candidate.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to verify password: {}", e),
            )),
        }
    }
}
