//! HTTP DTOs for social endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::RecordId;
use crate::ports::TimelineEntry;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntryResponse {
    pub record_id: String,
    pub user_id: String,
    pub user_email: String,
    pub exercise_name: String,
    pub body_weight: f64,
    pub trained_on: NaiveDate,
    pub comment: String,
    pub liked_by_me: bool,
}

impl From<TimelineEntry> for TimelineEntryResponse {
    fn from(entry: TimelineEntry) -> Self {
        Self {
            record_id: entry.record_id.to_string(),
            user_id: entry.user_id.to_string(),
            user_email: entry.user_email,
            exercise_name: entry.exercise_name,
            body_weight: entry.body_weight,
            trained_on: entry.trained_on,
            comment: entry.comment,
            liked_by_me: entry.liked_by_me,
        }
    }
}

/// Like state after a like/unlike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeResponse {
    pub record_id: String,
    pub liked: bool,
}

impl LikeResponse {
    pub fn new(record_id: RecordId, liked: bool) -> Self {
        Self {
            record_id: record_id.to_string(),
            liked,
        }
    }
}
