use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

/// One row of the monthly gym-days ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GymDaysEntry {
    pub user_id: UserId,
    pub email: String,
    /// Distinct calendar dates with at least one record in the month.
    pub total_training_days: i64,
}

/// One row of the monthly total-volume ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalVolumeEntry {
    pub user_id: UserId,
    pub email: String,
    /// Sum of `reps × weight` over every set recorded in the month.
    pub total_volume: f64,
}
