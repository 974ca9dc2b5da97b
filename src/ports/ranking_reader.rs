//! Ranking aggregation port.
//!
//! Both queries cover the half-open date range `[first day, first day of
//! next month)` and return rows ordered by their metric, descending. Users
//! without records in the month are absent.

use async_trait::async_trait;

use crate::domain::foundation::{CalendarMonth, DomainError};
use crate::domain::ranking::{GymDaysEntry, TotalVolumeEntry};

#[async_trait]
pub trait RankingReader: Send + Sync {
    /// Distinct training dates per user in `month`.
    async fn monthly_gym_days(&self, month: CalendarMonth) -> Result<Vec<GymDaysEntry>, DomainError>;

    /// Sum of `reps × weight` per user in `month`.
    async fn monthly_total_volume(
        &self,
        month: CalendarMonth,
    ) -> Result<Vec<TotalVolumeEntry>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn RankingReader) {}
    }
}
