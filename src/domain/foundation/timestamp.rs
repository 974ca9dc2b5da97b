//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the Unix timestamp in seconds.
    pub fn as_unix_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Calendar date of this instant as observed in `zone`.
    pub fn date_in(&self, zone: FixedOffset) -> NaiveDate {
        self.0.with_timezone(&zone).date_naive()
    }

    /// `(year, month)` of this instant as observed in `zone`.
    pub fn year_month_in(&self, zone: FixedOffset) -> (i32, u32) {
        let local = self.0.with_timezone(&zone);
        (local.year(), local.month())
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokyo() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    fn at(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn date_in_zone_crosses_midnight() {
        // 2024-03-31 16:00 UTC is already April 1st in Tokyo.
        let ts = at("2024-03-31T16:00:00Z");
        assert_eq!(ts.date_in(tokyo()), NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert_eq!(ts.year_month_in(tokyo()), (2024, 4));
    }

    #[test]
    fn year_month_in_utc() {
        let ts = at("2024-12-31T23:59:59Z");
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(ts.year_month_in(utc), (2024, 12));
        assert_eq!(ts.year_month_in(tokyo()), (2025, 1));
    }

    #[test]
    fn timestamp_roundtrips_through_json() {
        let ts = at("2024-01-15T10:30:00Z");
        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.contains("2024-01-15"));
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }
}
