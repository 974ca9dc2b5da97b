//! GetDailyRecordsHandler - Query handler for one day's workout log.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::workout::WorkoutError;
use crate::ports::{DailyRecordView, WorkoutReader};

#[derive(Debug, Clone)]
pub struct GetDailyRecordsQuery {
    pub user_id: UserId,
    pub day: NaiveDate,
}

pub struct GetDailyRecordsHandler {
    reader: Arc<dyn WorkoutReader>,
}

impl GetDailyRecordsHandler {
    pub fn new(reader: Arc<dyn WorkoutReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetDailyRecordsQuery) -> Result<Vec<DailyRecordView>, WorkoutError> {
        let records = self.reader.find_daily(&query.user_id, query.day).await?;
        tracing::info!(date = %query.day, count = records.len(), "workout_daily_fetched");
        Ok(records)
    }
}
