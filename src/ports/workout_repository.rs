//! Workout repository port (write side).
//!
//! Persists `WorkoutRecord` aggregates together with their sets.
//!
//! # Replace semantics
//!
//! `update` is the only multi-statement write in the system. Implementations
//! must run it as one atomic unit:
//!
//! 1. delete every existing set of the record
//! 2. update the record's scalar fields
//! 3. insert the record's current sets
//!
//! If any step fails nothing is applied; the previously persisted record and
//! sets remain observable.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RecordId, UserId};
use crate::domain::workout::WorkoutRecord;

#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    /// Persist a new record and its sets.
    ///
    /// # Errors
    ///
    /// - `ReferenceViolation` if the exercise does not exist
    /// - `DatabaseError` on persistence failure
    async fn create(&self, record: &WorkoutRecord) -> Result<(), DomainError>;

    /// Point lookup scoped to the owner.
    ///
    /// Returns `None` if the record does not exist or belongs to someone else.
    async fn find_by_id_and_user(
        &self,
        id: &RecordId,
        user_id: &UserId,
    ) -> Result<Option<WorkoutRecord>, DomainError>;

    /// Replace the persisted record and all of its sets atomically.
    ///
    /// # Errors
    ///
    /// - `ReferenceViolation` if the new exercise does not exist
    /// - `RecordNotFound` if the record vanished since it was loaded
    /// - `DatabaseError` on persistence failure
    async fn update(&self, record: &WorkoutRecord) -> Result<(), DomainError>;

    /// Delete a record owned by `user_id`; its sets and likes cascade.
    ///
    /// # Errors
    ///
    /// - `RecordNotFound` if nothing was deleted
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &RecordId, user_id: &UserId) -> Result<(), DomainError>;
}
