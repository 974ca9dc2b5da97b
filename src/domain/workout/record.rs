//! Workout record aggregate.
//!
//! A record is one training session entry for a single exercise. It owns its
//! sets exclusively: sets are never edited in place, the whole collection is
//! replaced when the record is updated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ExerciseId, RecordId, SetId, Timestamp, UserId, ValidationError};

use super::WorkoutError;

/// One set as submitted by the caller, before it is bound to a record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetInput {
    pub set_no: i32,
    pub reps: i32,
    pub weight: f64,
}

impl SetInput {
    pub fn new(set_no: i32, reps: i32, weight: f64) -> Self {
        Self {
            set_no,
            reps,
            weight,
        }
    }

    /// Checks set number > 0, reps > 0 and a finite, non-negative weight.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.set_no <= 0 {
            return Err(ValidationError::out_of_range("set", "positive", self.set_no));
        }
        if self.reps <= 0 {
            return Err(ValidationError::out_of_range("reps", "positive", self.reps));
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(ValidationError::out_of_range(
                "exercise_weight",
                "zero or greater",
                self.weight,
            ));
        }
        Ok(())
    }
}

/// Validates a full set submission.
///
/// # Errors
///
/// - `NoSets` if `sets` is empty
/// - `InvalidSetValue` for the first set that fails [`SetInput::validate`]
pub fn validate_sets(sets: &[SetInput]) -> Result<(), WorkoutError> {
    if sets.is_empty() {
        return Err(WorkoutError::NoSets);
    }
    for set in sets {
        set.validate().map_err(WorkoutError::InvalidSetValue)?;
    }
    Ok(())
}

/// A persisted set belonging to a record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub id: SetId,
    pub set_no: i32,
    pub reps: i32,
    pub weight: f64,
}

impl WorkoutSet {
    /// Binds a caller-submitted set to a fresh identifier.
    fn from_input(input: &SetInput) -> Self {
        Self {
            id: SetId::new(),
            set_no: input.set_no,
            reps: input.reps,
            weight: input.weight,
        }
    }

    /// Training volume of this set (`reps × weight`).
    pub fn volume(&self) -> f64 {
        f64::from(self.reps) * self.weight
    }
}

/// Full desired state of a record, as resent by the caller on every edit.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDraft {
    pub exercise_id: ExerciseId,
    pub body_weight: f64,
    pub trained_on: NaiveDate,
    pub is_public: bool,
    pub comment: String,
    pub sets: Vec<SetInput>,
}

impl RecordDraft {
    pub fn validate(&self) -> Result<(), WorkoutError> {
        validate_sets(&self.sets)
    }
}

/// Workout record aggregate.
///
/// # Invariants
///
/// - at least one set
/// - every set has set number > 0, reps > 0, weight >= 0
/// - `trained_on` is a bare calendar date
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    id: RecordId,
    user_id: UserId,
    exercise_id: ExerciseId,
    body_weight: f64,
    trained_on: NaiveDate,
    is_public: bool,
    comment: String,
    sets: Vec<WorkoutSet>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl WorkoutRecord {
    /// Create a new record owned by `user_id`.
    ///
    /// # Errors
    ///
    /// - `NoSets` / `InvalidSetValue` if the draft's sets are invalid
    pub fn new(id: RecordId, user_id: UserId, draft: RecordDraft) -> Result<Self, WorkoutError> {
        draft.validate()?;

        let now = Timestamp::now();
        let sets = draft.sets.iter().map(WorkoutSet::from_input).collect();
        Ok(Self {
            id,
            user_id,
            exercise_id: draft.exercise_id,
            body_weight: draft.body_weight,
            trained_on: draft.trained_on,
            is_public: draft.is_public,
            comment: draft.comment,
            sets,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a record from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: RecordId,
        user_id: UserId,
        exercise_id: ExerciseId,
        body_weight: f64,
        trained_on: NaiveDate,
        is_public: bool,
        comment: String,
        sets: Vec<WorkoutSet>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            exercise_id,
            body_weight,
            trained_on,
            is_public,
            comment,
            sets,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn exercise_id(&self) -> &ExerciseId {
        &self.exercise_id
    }

    pub fn body_weight(&self) -> f64 {
        self.body_weight
    }

    pub fn trained_on(&self) -> NaiveDate {
        self.trained_on
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn sets(&self) -> &[WorkoutSet] {
        &self.sets
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Sum of `reps × weight` over all sets.
    pub fn total_volume(&self) -> f64 {
        self.sets.iter().map(WorkoutSet::volume).sum()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace every mutable field and the whole set collection.
    ///
    /// New sets receive fresh identifiers. On validation failure the record
    /// is left untouched.
    pub fn replace(&mut self, draft: RecordDraft) -> Result<(), WorkoutError> {
        draft.validate()?;

        self.exercise_id = draft.exercise_id;
        self.body_weight = draft.body_weight;
        self.trained_on = draft.trained_on;
        self.is_public = draft.is_public;
        self.comment = draft.comment;
        self.sets = draft.sets.iter().map(WorkoutSet::from_input).collect();
        self.updated_at = Timestamp::now();
        Ok(())
    }
}
