//! HTTP DTOs for user endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::user::AuthResult;
use crate::domain::user::User;
use crate::ports::HomeSummaryView;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /signup` and `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Body of `PUT /profile`. Omitted and `null` fields both clear the value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub goal_weight_kg: Option<f64>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub id: String,
    pub email: String,
    pub token: String,
}

impl From<AuthResult> for AuthResponse {
    fn from(result: AuthResult) -> Self {
        Self {
            id: result.user_id.to_string(),
            email: result.email.to_string(),
            token: result.token.into_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileResponse {
    pub email: String,
    pub height_cm: Option<f64>,
    pub goal_weight_kg: Option<f64>,
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            email: user.email().to_string(),
            height_cm: user.metrics().height_cm,
            goal_weight_kg: user.metrics().goal_weight_kg,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HomeSummaryResponse {
    pub total_training_days: i64,
    pub latest_weight: Option<f64>,
    /// `YYYY-MM-DD`, absent until the first record.
    pub latest_trained_on: Option<String>,
    pub goal_weight: Option<f64>,
    pub height: Option<f64>,
}

impl From<HomeSummaryView> for HomeSummaryResponse {
    fn from(view: HomeSummaryView) -> Self {
        Self {
            total_training_days: view.total_training_days,
            latest_weight: view.latest_weight,
            latest_trained_on: view.latest_trained_on.map(|d| d.format("%Y-%m-%d").to_string()),
            goal_weight: view.goal_weight_kg,
            height: view.height_cm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn summary_response_renames_metric_fields() {
        let response = HomeSummaryResponse::from(HomeSummaryView {
            total_training_days: 3,
            latest_weight: Some(70.0),
            latest_trained_on: NaiveDate::from_ymd_opt(2025, 10, 1),
            goal_weight_kg: Some(65.0),
            height_cm: Some(172.0),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["latest_trained_on"], "2025-10-01");
        assert_eq!(json["goal_weight"], 65.0);
        assert_eq!(json["height"], 172.0);
    }

    #[test]
    fn profile_request_accepts_missing_fields() {
        let req: UpdateProfileRequest = serde_json::from_str(r#"{"height_cm": 180}"#).unwrap();
        assert_eq!(req.height_cm, Some(180.0));
        assert!(req.goal_weight_kg.is_none());
    }
}
