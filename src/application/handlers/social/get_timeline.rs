//! GetTimelineHandler - Public records of every user.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::social::SocialError;
use crate::ports::{TimelineEntry, TimelineReader};

#[derive(Debug, Clone)]
pub struct GetTimelineQuery {
    pub viewer: UserId,
}

pub struct GetTimelineHandler {
    reader: Arc<dyn TimelineReader>,
}

impl GetTimelineHandler {
    pub fn new(reader: Arc<dyn TimelineReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetTimelineQuery) -> Result<Vec<TimelineEntry>, SocialError> {
        let entries = self.reader.list_public(&query.viewer).await?;
        tracing::info!(viewer = %query.viewer, count = entries.len(), "timeline_fetched");
        Ok(entries)
    }
}
