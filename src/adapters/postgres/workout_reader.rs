//! PostgreSQL implementation of WorkoutReader.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::foundation::{CalendarMonth, DomainError, ExerciseId, RecordId, SetId, UserId};
use crate::domain::workout::WorkoutSet;
use crate::ports::{DailyRecordView, ExerciseSetView, WorkoutReader};

#[derive(Clone)]
pub struct PostgresWorkoutReader {
    pool: PgPool,
}

impl PostgresWorkoutReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn sets_by_record(&self, record_ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<WorkoutSet>>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, record_id, set_no, reps, weight
            FROM workout_sets
            WHERE record_id = ANY($1)
            ORDER BY record_id, set_no
            "#,
        )
        .bind(record_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch workout sets", e))?;

        let mut grouped: HashMap<Uuid, Vec<WorkoutSet>> = HashMap::new();
        for row in rows {
            let (record_id, set) =
                decode_set_row(&row).map_err(|e| DomainError::database("decode workout set row", e))?;
            grouped.entry(record_id).or_default().push(set);
        }
        Ok(grouped)
    }
}

#[async_trait]
impl WorkoutReader for PostgresWorkoutReader {
    async fn find_daily(&self, user_id: &UserId, day: NaiveDate) -> Result<Vec<DailyRecordView>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT r.id, r.exercise_id, e.name AS exercise_name, r.body_weight,
                   r.trained_on, r.is_public, r.comment
            FROM workout_records r
            JOIN exercises e ON e.id = r.exercise_id
            WHERE r.user_id = $1 AND r.trained_on = $2
            ORDER BY r.created_at ASC
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(day)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch daily workout records", e))?;

        let ids = rows
            .iter()
            .map(|row| row.try_get::<Uuid, _>("id"))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::database("decode workout record row", e))?;
        let mut sets = self.sets_by_record(&ids).await?;

        rows.into_iter()
            .zip(ids)
            .map(|(row, id)| {
                let exercise_id: Uuid = row.try_get("exercise_id")?;
                Ok(DailyRecordView {
                    id: RecordId::from_uuid(id),
                    exercise_id: ExerciseId::from_uuid(exercise_id),
                    exercise_name: row.try_get("exercise_name")?,
                    body_weight: row.try_get("body_weight")?,
                    trained_on: row.try_get("trained_on")?,
                    is_public: row.try_get("is_public")?,
                    comment: row.try_get("comment")?,
                    sets: sets.remove(&id).unwrap_or_default(),
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(|e| DomainError::database("decode workout record row", e))
    }

    async fn find_record_days(&self, user_id: &UserId, month: CalendarMonth) -> Result<Vec<NaiveDate>, DomainError> {
        let days: Vec<(NaiveDate,)> = sqlx::query_as(
            r#"
            SELECT DISTINCT trained_on
            FROM workout_records
            WHERE user_id = $1 AND trained_on >= $2 AND trained_on < $3
            ORDER BY trained_on
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(month.first_day())
        .bind(month.next_first_day())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch training days", e))?;

        Ok(days.into_iter().map(|(day,)| day).collect())
    }

    async fn find_exercise_history(
        &self,
        user_id: &UserId,
        exercise_id: &ExerciseId,
    ) -> Result<Vec<ExerciseSetView>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT r.id AS record_id, r.trained_on, s.set_no, s.reps, s.weight, r.body_weight
            FROM workout_sets s
            JOIN workout_records r ON r.id = s.record_id
            WHERE r.user_id = $1 AND r.exercise_id = $2
            ORDER BY r.trained_on, r.created_at, s.set_no
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(exercise_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch exercise history", e))?;

        rows.into_iter()
            .map(|row| {
                let record_id: Uuid = row.try_get("record_id")?;
                Ok(ExerciseSetView {
                    record_id: RecordId::from_uuid(record_id),
                    trained_on: row.try_get("trained_on")?,
                    set_no: row.try_get("set_no")?,
                    reps: row.try_get("reps")?,
                    weight: row.try_get("weight")?,
                    body_weight: row.try_get("body_weight")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(|e| DomainError::database("decode exercise history row", e))
    }
}

fn decode_set_row(row: &PgRow) -> Result<(Uuid, WorkoutSet), sqlx::Error> {
    let id: Uuid = row.try_get("id")?;
    let set = WorkoutSet {
        id: SetId::from_uuid(id),
        set_no: row.try_get("set_no")?,
        reps: row.try_get("reps")?,
        weight: row.try_get("weight")?,
    };
    Ok((row.try_get("record_id")?, set))
}
