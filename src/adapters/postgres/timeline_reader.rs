//! PostgreSQL implementation of TimelineReader.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, RecordId, UserId};
use crate::ports::{TimelineEntry, TimelineReader};

#[derive(Clone)]
pub struct PostgresTimelineReader {
    pool: PgPool,
}

impl PostgresTimelineReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TimelineReader for PostgresTimelineReader {
    async fn list_public(&self, viewer: &UserId) -> Result<Vec<TimelineEntry>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT r.id, r.user_id, u.email, e.name AS exercise_name,
                   r.body_weight, r.trained_on, r.comment,
                   EXISTS (
                       SELECT 1 FROM workout_likes l
                       WHERE l.record_id = r.id AND l.user_id = $1
                   ) AS liked_by_me
            FROM workout_records r
            JOIN users u ON u.id = r.user_id
            JOIN exercises e ON e.id = r.exercise_id
            WHERE r.is_public
            ORDER BY r.trained_on DESC, r.created_at DESC
            "#,
        )
        .bind(viewer.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch timeline", e))?;

        rows.into_iter()
            .map(|row| {
                let record_id: Uuid = row.try_get("id")?;
                let user_id: Uuid = row.try_get("user_id")?;
                Ok(TimelineEntry {
                    record_id: RecordId::from_uuid(record_id),
                    user_id: UserId::from_uuid(user_id),
                    user_email: row.try_get("email")?,
                    exercise_name: row.try_get("exercise_name")?,
                    body_weight: row.try_get("body_weight")?,
                    trained_on: row.try_get("trained_on")?,
                    comment: row.try_get("comment")?,
                    liked_by_me: row.try_get("liked_by_me")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(|e| DomainError::database("decode timeline row", e))
    }
}
