//! PostgreSQL implementation of ExerciseRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::exercise::Exercise;
use crate::domain::foundation::{DomainError, ExerciseId};
use crate::ports::ExerciseRepository;

use super::error::write_error;

#[derive(Clone)]
pub struct PostgresExerciseRepository {
    pool: PgPool,
}

impl PostgresExerciseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExerciseRepository for PostgresExerciseRepository {
    async fn list(&self) -> Result<Vec<Exercise>, DomainError> {
        let rows = sqlx::query("SELECT id, name FROM exercises ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("list exercises", e))?;

        rows.into_iter()
            .map(|row| {
                let id: Uuid = row.try_get("id")?;
                Ok(Exercise {
                    id: ExerciseId::from_uuid(id),
                    name: row.try_get("name")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(|e| DomainError::database("decode exercise row", e))
    }

    async fn seed(&self, names: &[&str]) -> Result<u64, DomainError> {
        let mut inserted = 0;
        for name in names {
            let result = sqlx::query(
                "INSERT INTO exercises (id, name) VALUES ($1, $2) ON CONFLICT (name) DO NOTHING",
            )
            .bind(Uuid::new_v4())
            .bind(*name)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error("seed exercise", e))?;
            inserted += result.rows_affected();
        }
        Ok(inserted)
    }
}
