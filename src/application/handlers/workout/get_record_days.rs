//! GetRecordDaysHandler - Which days of a month the user trained on.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::foundation::{CalendarMonth, UserId};
use crate::domain::workout::WorkoutError;
use crate::ports::WorkoutReader;

#[derive(Debug, Clone)]
pub struct GetRecordDaysQuery {
    pub user_id: UserId,
    pub year: i32,
    pub month: u32,
}

pub struct GetRecordDaysHandler {
    reader: Arc<dyn WorkoutReader>,
}

impl GetRecordDaysHandler {
    pub fn new(reader: Arc<dyn WorkoutReader>) -> Self {
        Self { reader }
    }

    /// Returns distinct training dates, ascending.
    pub async fn handle(&self, query: GetRecordDaysQuery) -> Result<Vec<NaiveDate>, WorkoutError> {
        let month =
            CalendarMonth::new(query.year, query.month).map_err(WorkoutError::ValidationFailed)?;

        let days = self.reader.find_record_days(&query.user_id, month).await?;

        tracing::info!(
            year = query.year,
            month = query.month,
            count = days.len(),
            "workout_month_days_fetched"
        );
        Ok(days)
    }
}
