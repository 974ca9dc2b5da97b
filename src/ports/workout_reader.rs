//! Workout reader port (read side).
//!
//! Query views of a user's own workout history: one day's records, the days
//! trained in a month, and the flat set history for one exercise.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CalendarMonth, DomainError, ExerciseId, RecordId, UserId};
use crate::domain::workout::WorkoutSet;

#[async_trait]
pub trait WorkoutReader: Send + Sync {
    /// Records of `user_id` trained on `day`, oldest first, with their
    /// exercise name and sets ordered by set number.
    async fn find_daily(
        &self,
        user_id: &UserId,
        day: NaiveDate,
    ) -> Result<Vec<DailyRecordView>, DomainError>;

    /// Distinct dates in `month` on which `user_id` has at least one record,
    /// ascending.
    async fn find_record_days(
        &self,
        user_id: &UserId,
        month: CalendarMonth,
    ) -> Result<Vec<NaiveDate>, DomainError>;

    /// Every set `user_id` logged for `exercise_id`, ordered by training
    /// date then set number.
    async fn find_exercise_history(
        &self,
        user_id: &UserId,
        exercise_id: &ExerciseId,
    ) -> Result<Vec<ExerciseSetView>, DomainError>;
}

/// One record as shown on the daily log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecordView {
    pub id: RecordId,
    pub exercise_id: ExerciseId,
    pub exercise_name: String,
    pub body_weight: f64,
    pub trained_on: NaiveDate,
    pub is_public: bool,
    pub comment: String,
    pub sets: Vec<WorkoutSet>,
}

/// One set flattened together with its record's date and body weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSetView {
    pub record_id: RecordId,
    pub trained_on: NaiveDate,
    pub set_no: i32,
    pub reps: i32,
    pub weight: f64,
    pub body_weight: f64,
}
