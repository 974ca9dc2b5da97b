//! Cached gym-days ranking and its freshness rule.

use chrono::FixedOffset;

use crate::domain::foundation::Timestamp;

use super::GymDaysEntry;

/// Owned copy of the cached ranking.
///
/// `computed_at` is `None` until the first non-empty store, and again after
/// an empty store clears the cache.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingSnapshot {
    pub rows: Vec<GymDaysEntry>,
    pub computed_at: Option<Timestamp>,
}

impl RankingSnapshot {
    /// Whether this snapshot can be served for a request made at `now`.
    ///
    /// An empty snapshot is never served, even when fresh.
    pub fn is_servable_at(&self, now: Timestamp, zone: FixedOffset) -> bool {
        !self.rows.is_empty() && is_fresh(self.computed_at, now, zone)
    }
}

/// A snapshot is fresh iff it was computed in the same calendar year and
/// month as `now`, both observed in `zone`.
pub fn is_fresh(computed_at: Option<Timestamp>, now: Timestamp, zone: FixedOffset) -> bool {
    match computed_at {
        Some(at) => at.year_month_in(zone) == now.year_month_in(zone),
        None => false,
    }
}
