//! Ranking configuration

use chrono::FixedOffset;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Reference time zone and refresh bounds for the monthly rankings.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// Offset of the zone in which calendar months are evaluated
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,

    /// Upper bound on one background refresh
    #[serde(default = "default_refresh_timeout")]
    pub refresh_timeout_secs: u64,
}

impl RankingConfig {
    pub fn zone(&self) -> Result<FixedOffset, ValidationError> {
        FixedOffset::east_opt(self.utc_offset_hours * 3600).ok_or(ValidationError::InvalidUtcOffset)
    }

    pub fn refresh_timeout(&self) -> Duration {
        Duration::from_secs(self.refresh_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(-12..=14).contains(&self.utc_offset_hours) {
            return Err(ValidationError::InvalidUtcOffset);
        }
        if !(1..=60).contains(&self.refresh_timeout_secs) {
            return Err(ValidationError::InvalidRefreshTimeout);
        }
        Ok(())
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: default_utc_offset_hours(),
            refresh_timeout_secs: default_refresh_timeout(),
        }
    }
}

fn default_utc_offset_hours() -> i32 {
    9
}

fn default_refresh_timeout() -> u64 {
    5
}
