//! GetGymDaysRankingHandler - Cached monthly ranking of distinct training days.
//!
//! # Flow
//!
//! 1. Derive the current month from the request time in the reference zone.
//! 2. Serve the cached snapshot if it is non-empty and was computed in that
//!    same month. Otherwise compute synchronously, store and serve.
//! 3. Either way, spawn a detached refresh bounded by a timeout. Its failure
//!    is logged and swallowed; the previous snapshot stays in place.
//!
//! Concurrent refreshes are last-write-wins.

use chrono::FixedOffset;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::domain::foundation::Timestamp;
use crate::domain::ranking::{GymDaysEntry, RankingError, RankingPeriod};
use crate::ports::RankingReader;

use super::RankingCache;

#[derive(Debug, Clone)]
pub struct GetGymDaysRankingQuery {
    /// Request time. The ranking month is derived from it.
    pub as_of: Timestamp,
}

/// Where the served rows came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingSource {
    Cache,
    Store,
}

#[derive(Debug)]
pub struct GymDaysRankingResult {
    pub period: RankingPeriod,
    pub rows: Vec<GymDaysEntry>,
    pub source: RankingSource,
    /// Background refresh spawned by this request. Safe to drop.
    pub refresh: JoinHandle<()>,
}

pub struct GetGymDaysRankingHandler {
    reader: Arc<dyn RankingReader>,
    cache: Arc<RankingCache>,
    zone: FixedOffset,
    refresh_timeout: Duration,
}

impl GetGymDaysRankingHandler {
    pub fn new(
        reader: Arc<dyn RankingReader>,
        cache: Arc<RankingCache>,
        zone: FixedOffset,
        refresh_timeout: Duration,
    ) -> Self {
        Self {
            reader,
            cache,
            zone,
            refresh_timeout,
        }
    }

    pub async fn handle(&self, query: GetGymDaysRankingQuery) -> Result<GymDaysRankingResult, RankingError> {
        let period = RankingPeriod::current(query.as_of, self.zone);
        let snapshot = self.cache.snapshot();

        let (rows, source) = if snapshot.is_servable_at(query.as_of, self.zone) {
            tracing::info!(
                year = period.year(),
                month = period.month(),
                count = snapshot.rows.len(),
                "monthly_gym_days_ranking_served_from_cache"
            );
            (snapshot.rows, RankingSource::Cache)
        } else {
            let rows = self.reader.monthly_gym_days(period.calendar_month()).await?;
            self.cache.store(&rows);
            tracing::info!(
                year = period.year(),
                month = period.month(),
                count = rows.len(),
                "monthly_gym_days_ranking_fetched_from_db"
            );
            (rows, RankingSource::Store)
        };

        let refresh = self.spawn_refresh(period);

        Ok(GymDaysRankingResult {
            period,
            rows,
            source,
            refresh,
        })
    }

    /// Recompute `period` in the background and swap it into the cache.
    fn spawn_refresh(&self, period: RankingPeriod) -> JoinHandle<()> {
        let reader = Arc::clone(&self.reader);
        let cache = Arc::clone(&self.cache);
        let timeout = self.refresh_timeout;

        tokio::spawn(async move {
            let outcome =
                tokio::time::timeout(timeout, reader.monthly_gym_days(period.calendar_month())).await;

            match outcome {
                Ok(Ok(rows)) => {
                    cache.store(&rows);
                    tracing::info!(
                        year = period.year(),
                        month = period.month(),
                        count = rows.len(),
                        "monthly_gym_days_ranking_refreshed"
                    );
                }
                Ok(Err(e)) => {
                    tracing::error!(
                        year = period.year(),
                        month = period.month(),
                        error = %e,
                        "refresh_monthly_gym_days_failed"
                    );
                }
                Err(_) => {
                    tracing::error!(
                        year = period.year(),
                        month = period.month(),
                        timeout_ms = timeout.as_millis() as u64,
                        "refresh_monthly_gym_days_failed"
                    );
                }
            }
        })
    }
}
