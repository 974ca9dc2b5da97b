//! In-process cache for the monthly gym-days ranking.
//!
//! Holds one `RankingSnapshot` behind an `RwLock`. Readers get an owned copy
//! and writers replace the whole snapshot, so callers can never observe or
//! cause a partial update. The lock is never held across I/O.

use std::sync::{PoisonError, RwLock};

use crate::domain::foundation::Timestamp;
use crate::domain::ranking::{GymDaysEntry, RankingSnapshot};

#[derive(Debug, Default)]
pub struct RankingCache {
    inner: RwLock<RankingSnapshot>,
}

impl RankingCache {
    /// An empty cache: no rows, no computed-at time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Owned copy of the current rows and their computed-at time.
    pub fn snapshot(&self) -> RankingSnapshot {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the snapshot with a copy of `rows`, stamped with the current time.
    ///
    /// Storing an empty slice clears the cache back to its initial state.
    pub fn store(&self, rows: &[GymDaysEntry]) {
        self.store_at(rows, Timestamp::now());
    }

    /// Like [`store`](Self::store) with an explicit computed-at time.
    pub fn store_at(&self, rows: &[GymDaysEntry], computed_at: Timestamp) {
        let next = if rows.is_empty() {
            RankingSnapshot::default()
        } else {
            RankingSnapshot {
                rows: rows.to_vec(),
                computed_at: Some(computed_at),
            }
        };

        *self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner) = next;
    }
}
