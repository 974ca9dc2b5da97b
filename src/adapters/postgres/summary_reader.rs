//! PostgreSQL implementation of SummaryReader.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{HomeSummaryView, SummaryReader};

#[derive(Clone)]
pub struct PostgresSummaryReader {
    pool: PgPool,
}

impl PostgresSummaryReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SummaryReader for PostgresSummaryReader {
    async fn home_summary(&self, user_id: &UserId) -> Result<Option<HomeSummaryView>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT u.height_cm, u.goal_weight_kg,
                   (SELECT COUNT(DISTINCT trained_on) FROM workout_records WHERE user_id = u.id)
                       AS total_training_days,
                   latest.body_weight AS latest_weight,
                   latest.trained_on AS latest_trained_on
            FROM users u
            LEFT JOIN LATERAL (
                SELECT body_weight, trained_on
                FROM workout_records
                WHERE user_id = u.id
                ORDER BY trained_on DESC, created_at DESC
                LIMIT 1
            ) latest ON TRUE
            WHERE u.id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch home summary", e))?;

        row.map(|row| {
            Ok::<_, sqlx::Error>(HomeSummaryView {
                total_training_days: row.try_get("total_training_days")?,
                latest_weight: row.try_get("latest_weight")?,
                latest_trained_on: row.try_get("latest_trained_on")?,
                goal_weight_kg: row.try_get("goal_weight_kg")?,
                height_cm: row.try_get("height_cm")?,
            })
        })
        .transpose()
        .map_err(|e| DomainError::database("decode home summary row", e))
    }
}
