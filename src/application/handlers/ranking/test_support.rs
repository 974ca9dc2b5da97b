//! Shared mocks for ranking handler tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::foundation::{CalendarMonth, DomainError, UserId};
use crate::domain::ranking::{GymDaysEntry, TotalVolumeEntry};
use crate::ports::RankingReader;

/// Ranking reader with canned rows, a call counter, and switchable failure.
pub struct MockRankingReader {
    gym_days: Vec<GymDaysEntry>,
    total_volume: Vec<TotalVolumeEntry>,
    calls: AtomicUsize,
    failing: AtomicBool,
    delay: Mutex<Option<Duration>>,
    months: Mutex<Vec<CalendarMonth>>,
}

impl MockRankingReader {
    pub fn returning(gym_days: Vec<GymDaysEntry>) -> Self {
        Self {
            gym_days,
            total_volume: Vec::new(),
            calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
            delay: Mutex::new(None),
            months: Mutex::new(Vec::new()),
        }
    }

    pub fn with_volume(total_volume: Vec<TotalVolumeEntry>) -> Self {
        let mut reader = Self::returning(Vec::new());
        reader.total_volume = total_volume;
        reader
    }

    pub fn failing() -> Self {
        let reader = Self::returning(Vec::new());
        reader.set_failing(true);
        reader
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn months_queried(&self) -> Vec<CalendarMonth> {
        self.months.lock().unwrap().clone()
    }

    async fn enter(&self, month: CalendarMonth) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.months.lock().unwrap().push(month);
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::database("aggregate monthly ranking", "connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl RankingReader for MockRankingReader {
    async fn monthly_gym_days(&self, month: CalendarMonth) -> Result<Vec<GymDaysEntry>, DomainError> {
        self.enter(month).await?;
        Ok(self.gym_days.clone())
    }

    async fn monthly_total_volume(
        &self,
        month: CalendarMonth,
    ) -> Result<Vec<TotalVolumeEntry>, DomainError> {
        self.enter(month).await?;
        Ok(self.total_volume.clone())
    }
}

pub fn entry(email: &str, days: i64) -> GymDaysEntry {
    GymDaysEntry {
        user_id: UserId::new(),
        email: email.to_string(),
        total_training_days: days,
    }
}
