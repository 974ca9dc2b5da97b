//! Ranking period: the calendar month a ranking is computed over.

use chrono::FixedOffset;
use std::fmt;
use std::ops::RangeInclusive;

use crate::domain::foundation::{CalendarMonth, Timestamp, ValidationError};

/// Years a ranking may be requested for.
pub const RANKING_YEARS: RangeInclusive<i32> = 2000..=2100;

/// A validated `(year, month)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankingPeriod {
    month: CalendarMonth,
}

impl RankingPeriod {
    /// # Errors
    ///
    /// - `OutOfRange` if `month` is not 1-12 or `year` is not 2000-2100
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        let calendar = CalendarMonth::new(year, month)?;
        if !RANKING_YEARS.contains(&year) {
            return Err(ValidationError::out_of_range("year", "between 2000 and 2100", year));
        }
        Ok(Self { month: calendar })
    }

    /// The month containing `now`, observed in `zone`.
    ///
    /// Not range-checked: the clock is trusted.
    pub fn current(now: Timestamp, zone: FixedOffset) -> Self {
        Self {
            month: CalendarMonth::containing(now.date_in(zone)),
        }
    }

    pub fn year(&self) -> i32 {
        self.month.year()
    }

    pub fn month(&self) -> u32 {
        self.month.month()
    }

    pub fn calendar_month(&self) -> CalendarMonth {
        self.month
    }
}

impl fmt::Display for RankingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.month.fmt(f)
    }
}
