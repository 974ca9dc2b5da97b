//! Token issuer port.
//!
//! Issues the access token returned by signup and login. The token must be
//! accepted by the `SessionValidator` wired into the same process.

use crate::domain::foundation::{AccessToken, AuthError, AuthenticatedUser};

pub trait TokenIssuer: Send + Sync {
    /// Issue a token identifying `user`.
    ///
    /// # Errors
    ///
    /// - `AuthError::IssuanceFailed` if signing fails
    fn issue(&self, user: &AuthenticatedUser) -> Result<AccessToken, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_issuer_is_object_safe() {
        fn _accepts_dyn(_issuer: &dyn TokenIssuer) {}
    }
}
