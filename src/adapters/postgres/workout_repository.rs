//! PostgreSQL implementation of WorkoutRepository.
//!
//! Records and their sets are written together; `update` replaces the sets
//! wholesale inside one transaction.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Postgres, Row, Transaction};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, ExerciseId, RecordId, SetId, Timestamp, UserId};
use crate::domain::workout::{WorkoutRecord, WorkoutSet};
use crate::ports::WorkoutRepository;

use super::error::write_error;

#[derive(Clone)]
pub struct PostgresWorkoutRepository {
    pool: PgPool,
}

impl PostgresWorkoutRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn insert_sets(
    tx: &mut Transaction<'_, Postgres>,
    record_id: &RecordId,
    sets: &[WorkoutSet],
) -> Result<(), DomainError> {
    for set in sets {
        sqlx::query(
            r#"
            INSERT INTO workout_sets (id, record_id, set_no, reps, weight)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(set.id.as_uuid())
        .bind(record_id.as_uuid())
        .bind(set.set_no)
        .bind(set.reps)
        .bind(set.weight)
        .execute(&mut **tx)
        .await
        .map_err(|e| write_error("insert workout set", e))?;
    }
    Ok(())
}

#[async_trait]
impl WorkoutRepository for PostgresWorkoutRepository {
    async fn create(&self, record: &WorkoutRecord) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("begin transaction", e))?;

        sqlx::query(
            r#"
            INSERT INTO workout_records (
                id, user_id, exercise_id, body_weight, trained_on, is_public, comment,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(record.user_id().as_uuid())
        .bind(record.exercise_id().as_uuid())
        .bind(record.body_weight())
        .bind(record.trained_on())
        .bind(record.is_public())
        .bind(record.comment())
        .bind(record.created_at().as_datetime())
        .bind(record.updated_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| write_error("insert workout record", e))?;

        insert_sets(&mut tx, record.id(), record.sets()).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("commit workout record", e))
    }

    async fn find_by_id_and_user(
        &self,
        id: &RecordId,
        user_id: &UserId,
    ) -> Result<Option<WorkoutRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, exercise_id, body_weight, trained_on, is_public, comment,
                   created_at, updated_at
            FROM workout_records
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch workout record", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let set_rows = sqlx::query(
            "SELECT id, set_no, reps, weight FROM workout_sets WHERE record_id = $1 ORDER BY set_no",
        )
        .bind(id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch workout sets", e))?;

        decode_record(row, decode_sets(set_rows)?).map(Some)
    }

    async fn update(&self, record: &WorkoutRecord) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("begin transaction", e))?;

        sqlx::query("DELETE FROM workout_sets WHERE record_id = $1")
            .bind(record.id().as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| write_error("delete workout sets", e))?;

        let updated = sqlx::query(
            r#"
            UPDATE workout_records SET
                body_weight = $3,
                exercise_id = $4,
                trained_on = $5,
                is_public = $6,
                comment = $7,
                updated_at = $8
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(record.user_id().as_uuid())
        .bind(record.body_weight())
        .bind(record.exercise_id().as_uuid())
        .bind(record.trained_on())
        .bind(record.is_public())
        .bind(record.comment())
        .bind(record.updated_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| write_error("update workout record", e))?;

        if updated.rows_affected() == 0 {
            // Dropping `tx` rolls back the set deletion.
            return Err(DomainError::new(
                ErrorCode::RecordNotFound,
                format!("Workout record not found: {}", record.id()),
            ));
        }

        insert_sets(&mut tx, record.id(), record.sets()).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("update workout record", e))
    }

    async fn delete(&self, id: &RecordId, user_id: &UserId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM workout_records WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete workout record", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::RecordNotFound,
                format!("Workout record not found: {}", id),
            ));
        }
        Ok(())
    }
}

fn decode_sets(rows: Vec<sqlx::postgres::PgRow>) -> Result<Vec<WorkoutSet>, DomainError> {
    rows.into_iter()
        .map(|row| {
            let id: Uuid = row.try_get("id")?;
            Ok(WorkoutSet {
                id: SetId::from_uuid(id),
                set_no: row.try_get("set_no")?,
                reps: row.try_get("reps")?,
                weight: row.try_get("weight")?,
            })
        })
        .collect::<Result<Vec<_>, sqlx::Error>>()
        .map_err(|e| DomainError::database("decode workout set row", e))
}

fn decode_record(row: sqlx::postgres::PgRow, sets: Vec<WorkoutSet>) -> Result<WorkoutRecord, DomainError> {
    let map = |e: sqlx::Error| DomainError::database("decode workout record row", e);

    let id = RecordId::from_uuid(row.try_get::<Uuid, _>("id").map_err(map)?);
    let user_id: Uuid = row.try_get("user_id").map_err(map)?;
    let exercise_id: Uuid = row.try_get("exercise_id").map_err(map)?;
    let trained_on: NaiveDate = row.try_get("trained_on").map_err(map)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map)?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(map)?;

    Ok(WorkoutRecord::reconstitute(
        id,
        UserId::from_uuid(user_id),
        ExerciseId::from_uuid(exercise_id),
        row.try_get("body_weight").map_err(map)?,
        trained_on,
        row.try_get("is_public").map_err(map)?,
        row.try_get("comment").map_err(map)?,
        sets,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
