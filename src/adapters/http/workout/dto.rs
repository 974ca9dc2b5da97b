//! HTTP DTOs for workout record endpoints.
//!
//! Set fields keep the client-facing names `set` and `exercise_weight`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ExerciseId;
use crate::domain::workout::{RecordDraft, SetInput, WorkoutSet};
use crate::ports::{DailyRecordView, ExerciseSetView};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One set as sent and returned by the API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetPayload {
    #[serde(rename = "set")]
    pub set_no: i32,
    pub reps: i32,
    #[serde(rename = "exercise_weight")]
    pub weight: f64,
}

impl From<SetPayload> for SetInput {
    fn from(set: SetPayload) -> Self {
        SetInput::new(set.set_no, set.reps, set.weight)
    }
}

impl From<&WorkoutSet> for SetPayload {
    fn from(set: &WorkoutSet) -> Self {
        Self {
            set_no: set.set_no,
            reps: set.reps,
            weight: set.weight,
        }
    }
}

/// Body of `POST /training_records` and `PUT /training_records/:id`.
///
/// An update carries the full desired state; its sets replace the stored ones.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordRequest {
    pub exercise_id: ExerciseId,
    pub body_weight: f64,
    pub trained_on: NaiveDate,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub sets: Vec<SetPayload>,
}

impl From<RecordRequest> for RecordDraft {
    fn from(req: RecordRequest) -> Self {
        RecordDraft {
            exercise_id: req.exercise_id,
            body_weight: req.body_weight,
            trained_on: req.trained_on,
            is_public: req.is_public,
            comment: req.comment,
            sets: req.sets.into_iter().map(SetInput::from).collect(),
        }
    }
}

/// `?date=YYYY-MM-DD`
#[derive(Debug, Clone, Deserialize)]
pub struct DailyQuery {
    pub date: NaiveDate,
}

/// `?year=&month=`
#[derive(Debug, Clone, Deserialize)]
pub struct RecordDaysQuery {
    pub year: i32,
    pub month: u32,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordCommandResponse {
    pub message: String,
    pub record_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecordResponse {
    pub id: String,
    pub exercise_id: String,
    pub exercise_name: String,
    pub body_weight: f64,
    pub trained_on: NaiveDate,
    pub is_public: bool,
    pub comment: String,
    pub sets: Vec<SetPayload>,
}

impl From<DailyRecordView> for DailyRecordResponse {
    fn from(view: DailyRecordView) -> Self {
        Self {
            id: view.id.to_string(),
            exercise_id: view.exercise_id.to_string(),
            exercise_name: view.exercise_name,
            body_weight: view.body_weight,
            trained_on: view.trained_on,
            is_public: view.is_public,
            comment: view.comment,
            sets: view.sets.iter().map(SetPayload::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseSetResponse {
    pub record_id: String,
    pub trained_on: NaiveDate,
    #[serde(rename = "set")]
    pub set_no: i32,
    pub reps: i32,
    #[serde(rename = "exercise_weight")]
    pub weight: f64,
    pub body_weight: f64,
}

impl From<ExerciseSetView> for ExerciseSetResponse {
    fn from(view: ExerciseSetView) -> Self {
        Self {
            record_id: view.record_id.to_string(),
            trained_on: view.trained_on,
            set_no: view.set_no,
            reps: view.reps,
            weight: view.weight,
            body_weight: view.body_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_request_uses_wire_names_for_sets() {
        let exercise_id = ExerciseId::new();
        let body = format!(
            r#"{{
                "exercise_id": "{exercise_id}",
                "body_weight": 70.5,
                "trained_on": "2025-10-14",
                "sets": [{{"set": 1, "reps": 10, "exercise_weight": 60.0}}]
            }}"#
        );

        let req: RecordRequest = serde_json::from_str(&body).unwrap();
        let draft = RecordDraft::from(req);

        assert_eq!(draft.exercise_id, exercise_id);
        assert!(!draft.is_public);
        assert!(draft.comment.is_empty());
        assert_eq!(draft.sets, vec![SetInput::new(1, 10, 60.0)]);
    }

    #[test]
    fn missing_sets_deserialize_as_empty() {
        let body = format!(
            r#"{{"exercise_id": "{}", "body_weight": 70.0, "trained_on": "2025-10-14"}}"#,
            ExerciseId::new()
        );

        let req: RecordRequest = serde_json::from_str(&body).unwrap();

        assert!(req.sets.is_empty());
    }
}
