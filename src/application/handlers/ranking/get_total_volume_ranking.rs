//! GetTotalVolumeRankingHandler - Monthly ranking by lifted volume.
//!
//! Not cached; every request aggregates from the store.

use chrono::FixedOffset;
use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::ranking::{RankingError, RankingPeriod, TotalVolumeEntry};
use crate::ports::RankingReader;

#[derive(Debug, Clone)]
pub struct GetTotalVolumeRankingQuery {
    /// Defaults to the year of `as_of`.
    pub year: Option<i32>,
    /// Defaults to the month of `as_of`.
    pub month: Option<u32>,
    pub as_of: Timestamp,
}

#[derive(Debug, Clone)]
pub struct TotalVolumeRankingResult {
    pub period: RankingPeriod,
    pub rows: Vec<TotalVolumeEntry>,
}

pub struct GetTotalVolumeRankingHandler {
    reader: Arc<dyn RankingReader>,
    zone: FixedOffset,
}

impl GetTotalVolumeRankingHandler {
    pub fn new(reader: Arc<dyn RankingReader>, zone: FixedOffset) -> Self {
        Self { reader, zone }
    }

    pub async fn handle(
        &self,
        query: GetTotalVolumeRankingQuery,
    ) -> Result<TotalVolumeRankingResult, RankingError> {
        let current = RankingPeriod::current(query.as_of, self.zone);
        let period = RankingPeriod::new(
            query.year.unwrap_or_else(|| current.year()),
            query.month.unwrap_or_else(|| current.month()),
        )?;

        let rows = self.reader.monthly_total_volume(period.calendar_month()).await?;

        tracing::info!(
            year = period.year(),
            month = period.month(),
            count = rows.len(),
            "monthly_total_volume_ranking_fetched"
        );

        Ok(TotalVolumeRankingResult { period, rows })
    }
}
