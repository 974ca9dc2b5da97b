//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Shortest signing secret accepted outside development.
pub const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// HS256 token signing settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared HMAC signing key
    pub jwt_secret: SecretString,

    /// Lifetime of issued access tokens
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,

    /// Value of the `iss` claim; validated when present
    pub issuer: Option<String>,
}

impl AuthConfig {
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret_len = self.jwt_secret.expose_secret().len();
        if secret_len == 0 {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if *environment == Environment::Production && secret_len < MIN_PRODUCTION_SECRET_LEN {
            return Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_LEN));
        }
        if !(60..=30 * 24 * 3600).contains(&self.token_ttl_secs) {
            return Err(ValidationError::InvalidTokenTtl);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: SecretString::new(String::new()),
            token_ttl_secs: default_token_ttl(),
            issuer: None,
        }
    }
}

fn default_token_ttl() -> u64 {
    2 * 60 * 60
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_secret(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: SecretString::new(secret.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.token_ttl(), Duration::from_secs(7200));
        assert!(config.issuer.is_none());
    }

    #[test]
    fn test_validation_missing_secret() {
        assert_eq!(
            AuthConfig::default().validate(&Environment::Development),
            Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"))
        );
    }

    #[test]
    fn test_short_secret_allowed_only_in_development() {
        let config = with_secret("dev-secret");
        assert!(config.validate(&Environment::Development).is_ok());
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_LEN))
        );
    }

    #[test]
    fn test_validation_token_ttl_bounds() {
        let config = AuthConfig {
            token_ttl_secs: 10,
            ..with_secret("dev-secret")
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidTokenTtl)
        );
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let rendered = format!("{:?}", with_secret("super-secret-value"));
        assert!(!rendered.contains("super-secret-value"));
    }
}
