//! GetHomeSummaryHandler - Totals shown on the home screen.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::UserError;
use crate::ports::{HomeSummaryView, SummaryReader};

#[derive(Debug, Clone)]
pub struct GetHomeSummaryQuery {
    pub user_id: UserId,
}

pub struct GetHomeSummaryHandler {
    reader: Arc<dyn SummaryReader>,
}

impl GetHomeSummaryHandler {
    pub fn new(reader: Arc<dyn SummaryReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetHomeSummaryQuery) -> Result<HomeSummaryView, UserError> {
        let summary = self
            .reader
            .home_summary(&query.user_id)
            .await?
            .ok_or(UserError::NotFound(query.user_id))?;

        tracing::info!(
            user_id = %query.user_id,
            total_training_days = summary.total_training_days,
            latest_trained_on = ?summary.latest_trained_on,
            "home_summary_fetched"
        );
        Ok(summary)
    }
}
