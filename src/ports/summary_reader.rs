//! Home summary reader port.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, UserId};

#[async_trait]
pub trait SummaryReader: Send + Sync {
    /// Training totals and profile basics for the home screen.
    ///
    /// Returns `None` if the user does not exist.
    async fn home_summary(&self, user_id: &UserId) -> Result<Option<HomeSummaryView>, DomainError>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeSummaryView {
    /// Distinct dates with at least one record, all time.
    pub total_training_days: i64,
    /// Body weight on the most recent record.
    pub latest_weight: Option<f64>,
    /// Date of the most recent record.
    pub latest_trained_on: Option<NaiveDate>,
    pub goal_weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
}
