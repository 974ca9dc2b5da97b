//! PostgreSQL implementation of RankingReader.
//!
//! Both rankings cover `[first day of month, first day of next month)` and
//! list the highest value first; ties fall back to email order.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{CalendarMonth, DomainError, UserId};
use crate::domain::ranking::{GymDaysEntry, TotalVolumeEntry};
use crate::ports::RankingReader;

#[derive(Clone)]
pub struct PostgresRankingReader {
    pool: PgPool,
}

impl PostgresRankingReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RankingReader for PostgresRankingReader {
    async fn monthly_gym_days(&self, month: CalendarMonth) -> Result<Vec<GymDaysEntry>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT u.id, u.email, COUNT(DISTINCT r.trained_on) AS total_training_days
            FROM workout_records r
            JOIN users u ON u.id = r.user_id
            WHERE r.trained_on >= $1 AND r.trained_on < $2
            GROUP BY u.id, u.email
            ORDER BY total_training_days DESC, u.email ASC
            "#,
        )
        .bind(month.first_day())
        .bind(month.next_first_day())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("aggregate monthly gym days", e))?;

        rows.into_iter()
            .map(|row| {
                let id: Uuid = row.try_get("id")?;
                Ok(GymDaysEntry {
                    user_id: UserId::from_uuid(id),
                    email: row.try_get("email")?,
                    total_training_days: row.try_get("total_training_days")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(|e| DomainError::database("decode gym days row", e))
    }

    async fn monthly_total_volume(&self, month: CalendarMonth) -> Result<Vec<TotalVolumeEntry>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT u.id, u.email, SUM(s.reps * s.weight)::DOUBLE PRECISION AS total_volume
            FROM workout_sets s
            JOIN workout_records r ON r.id = s.record_id
            JOIN users u ON u.id = r.user_id
            WHERE r.trained_on >= $1 AND r.trained_on < $2
            GROUP BY u.id, u.email
            ORDER BY total_volume DESC, u.email ASC
            "#,
        )
        .bind(month.first_day())
        .bind(month.next_first_day())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("aggregate monthly total volume", e))?;

        rows.into_iter()
            .map(|row| {
                let id: Uuid = row.try_get("id")?;
                Ok(TotalVolumeEntry {
                    user_id: UserId::from_uuid(id),
                    email: row.try_get("email")?,
                    total_volume: row.try_get("total_volume")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(|e| DomainError::database("decode total volume row", e))
    }
}
