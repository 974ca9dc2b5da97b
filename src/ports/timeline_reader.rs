//! Timeline reader port.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, RecordId, UserId};

#[async_trait]
pub trait TimelineReader: Send + Sync {
    /// Public records of every user, most recently trained first.
    ///
    /// `liked_by_me` is computed for `viewer`.
    async fn list_public(&self, viewer: &UserId) -> Result<Vec<TimelineEntry>, DomainError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub record_id: RecordId,
    pub user_id: UserId,
    pub user_email: String,
    pub exercise_name: String,
    pub body_weight: f64,
    pub trained_on: NaiveDate,
    pub comment: String,
    pub liked_by_me: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn TimelineReader) {}
    }
}
