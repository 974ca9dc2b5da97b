//! Calendar month value object.

use chrono::{Datelike, Months, NaiveDate};
use std::fmt;

use super::ValidationError;

/// A calendar month, expressed as the half-open date range `[first, next_first)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarMonth {
    first_day: NaiveDate,
}

impl CalendarMonth {
    /// Creates a calendar month.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `month` is not 1-12 or the year is not representable
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::out_of_range("month", "between 1 and 12", month));
        }
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| ValidationError::out_of_range("year", "a valid calendar year", year))?;
        Ok(Self { first_day })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// First day of the month (inclusive lower bound).
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// First day of the following month (exclusive upper bound).
    pub fn next_first_day(&self) -> NaiveDate {
        self.first_day
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Whether `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date < self.next_first_day()
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}
