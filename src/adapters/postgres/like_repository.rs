//! PostgreSQL implementation of LikeRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, RecordId, UserId};
use crate::ports::LikeRepository;

use super::error::write_error;

#[derive(Clone)]
pub struct PostgresLikeRepository {
    pool: PgPool,
}

impl PostgresLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn is_record_public(&self, record_id: &RecordId) -> Result<Option<bool>, DomainError> {
        let row: Option<(bool,)> = sqlx::query_as("SELECT is_public FROM workout_records WHERE id = $1")
            .bind(record_id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("fetch record visibility", e))?;

        Ok(row.map(|(is_public,)| is_public))
    }

    async fn create_like(&self, user_id: &UserId, record_id: &RecordId) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO workout_likes (user_id, record_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, record_id) DO NOTHING
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(record_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| write_error("insert like", e))?;

        Ok(())
    }

    async fn delete_like(&self, user_id: &UserId, record_id: &RecordId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM workout_likes WHERE user_id = $1 AND record_id = $2")
            .bind(user_id.as_uuid())
            .bind(record_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete like", e))?;

        Ok(())
    }
}
