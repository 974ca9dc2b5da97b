//! PostgreSQL adapters - Database implementations of the ports.
//!
//! Write side:
//! - `PostgresUserRepository`, `PostgresExerciseRepository`
//! - `PostgresWorkoutRepository` (transactional set replacement)
//! - `PostgresLikeRepository`
//!
//! Read side:
//! - `PostgresWorkoutReader`, `PostgresTimelineReader`
//! - `PostgresSummaryReader`, `PostgresRankingReader`

mod error;
mod exercise_repository;
mod like_repository;
mod ranking_reader;
mod summary_reader;
mod timeline_reader;
mod user_repository;
mod workout_reader;
mod workout_repository;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;

pub use exercise_repository::PostgresExerciseRepository;
pub use like_repository::PostgresLikeRepository;
pub use ranking_reader::PostgresRankingReader;
pub use summary_reader::PostgresSummaryReader;
pub use timeline_reader::PostgresTimelineReader;
pub use user_repository::PostgresUserRepository;
pub use workout_reader::PostgresWorkoutReader;
pub use workout_repository::PostgresWorkoutRepository;

/// Opens a pool sized by `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .connect(&config.url)
        .await
}

/// Applies the embedded migrations in `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
