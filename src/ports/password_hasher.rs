//! Password hashing port.

use crate::domain::foundation::DomainError;
use crate::domain::user::Password;

/// One-way password hashing.
///
/// Hashes are self-describing strings (salt and parameters included), so
/// `verify` needs nothing but the stored hash.
pub trait PasswordHasher: Send + Sync {
    /// Hash a validated password.
    fn hash(&self, password: &Password) -> Result<String, DomainError>;

    /// Check a login attempt against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch; errors only for unreadable hashes.
    fn verify(&self, candidate: &str, stored_hash: &str) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hasher_is_object_safe() {
        fn _accepts_dyn(_hasher: &dyn PasswordHasher) {}
    }
}
