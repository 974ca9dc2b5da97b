//! Muscle Diary server binary.

use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use muscle_diary::adapters::auth::{Argon2PasswordHasher, JwtAuthenticator};
use muscle_diary::adapters::http::{build_router, Ports, RouterSettings};
use muscle_diary::adapters::postgres::{
    self, PostgresExerciseRepository, PostgresLikeRepository, PostgresRankingReader,
    PostgresSummaryReader, PostgresTimelineReader, PostgresUserRepository,
    PostgresWorkoutReader, PostgresWorkoutRepository,
};
use muscle_diary::application::handlers::ranking::RankingCache;
use muscle_diary::config::{AppConfig, ConfigError, ValidationError};
use muscle_diary::domain::exercise::DEFAULT_EXERCISES;
use muscle_diary::ports::ExerciseRepository;

#[derive(Debug, Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("seeding exercises: {0}")]
    Seed(String),

    #[error("server: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let addr = config.server.socket_addr()?;
    tracing::info!(
        environment = ?config.server.environment,
        %addr,
        "starting_muscle_diary"
    );

    let pool = postgres::connect(&config.database).await?;
    if config.database.run_migrations {
        postgres::run_migrations(&pool).await?;
        tracing::info!("migrations_applied");
    }

    let exercises = Arc::new(PostgresExerciseRepository::new(pool.clone()));
    let seeded = exercises
        .seed(&DEFAULT_EXERCISES)
        .await
        .map_err(|e| StartupError::Seed(e.to_string()))?;
    tracing::info!(inserted = seeded, "exercises_seeded");

    let jwt = Arc::new(JwtAuthenticator::from_config(&config.auth));
    let ports = Ports {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        exercises,
        workouts: Arc::new(PostgresWorkoutRepository::new(pool.clone())),
        workout_reader: Arc::new(PostgresWorkoutReader::new(pool.clone())),
        likes: Arc::new(PostgresLikeRepository::new(pool.clone())),
        timeline: Arc::new(PostgresTimelineReader::new(pool.clone())),
        summary: Arc::new(PostgresSummaryReader::new(pool.clone())),
        rankings: Arc::new(PostgresRankingReader::new(pool.clone())),
        hasher: Arc::new(Argon2PasswordHasher::new()),
        tokens: jwt.clone(),
        sessions: jwt,
    };

    let app = build_router(
        ports,
        Arc::new(RankingCache::new()),
        RouterSettings::from_config(&config)?,
    );

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shutdown_complete");
    Ok(())
}

/// JSON lines in production, human-readable otherwise.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "ctrl_c_handler_failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "sigterm_handler_failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received_ctrl_c"),
        _ = terminate => tracing::info!("received_sigterm"),
    }
}
