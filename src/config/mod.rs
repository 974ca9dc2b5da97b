//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `MUSCLE_DIARY` prefix
//! and `__` between nesting levels.
//!
//! # Example
//!
//! ```no_run
//! use muscle_diary::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod database;
mod error;
mod ranking;
mod server;

pub use auth::{AuthConfig, MIN_PRODUCTION_SECRET_LEN};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use ranking::RankingConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    pub database: DatabaseConfig,

    pub auth: AuthConfig,

    #[serde(default)]
    pub ranking: RankingConfig,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Reads `.env` when present, then variables such as
    /// `MUSCLE_DIARY__SERVER__PORT=8080` or `MUSCLE_DIARY__AUTH__JWT_SECRET=...`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("MUSCLE_DIARY")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic checks that deserialization cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.ranking.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "MUSCLE_DIARY__DATABASE__URL",
        "MUSCLE_DIARY__AUTH__JWT_SECRET",
        "MUSCLE_DIARY__SERVER__PORT",
        "MUSCLE_DIARY__SERVER__ENVIRONMENT",
        "MUSCLE_DIARY__RANKING__UTC_OFFSET_HOURS",
    ];

    fn set_minimal_env() {
        env::set_var("MUSCLE_DIARY__DATABASE__URL", "postgres://test@localhost/test");
        env::set_var("MUSCLE_DIARY__AUTH__JWT_SECRET", "test-secret");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(extra: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        set_minimal_env();
        for (key, value) in extra {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_load_from_environment() {
        let config = load_with(&[]).unwrap();

        assert_eq!(config.database.url, "postgres://test@localhost/test");
        assert_eq!(config.auth.jwt_secret.expose_secret(), "test-secret");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_apply_to_omitted_sections() {
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.auth.token_ttl_secs, 7200);
        assert_eq!(config.ranking.utc_offset_hours, 9);
        assert_eq!(config.ranking.refresh_timeout_secs, 5);
    }

    #[test]
    fn test_overrides() {
        let config = load_with(&[
            ("MUSCLE_DIARY__SERVER__PORT", "3000"),
            ("MUSCLE_DIARY__RANKING__UTC_OFFSET_HOURS", "0"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.ranking.utc_offset_hours, 0);
    }

    #[test]
    fn test_production_rejects_short_secret() {
        let config = load_with(&[("MUSCLE_DIARY__SERVER__ENVIRONMENT", "production")]).unwrap();

        assert!(config.is_production());
        assert_eq!(
            config.validate(),
            Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_LEN))
        );
    }
}
