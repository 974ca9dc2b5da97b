//! Ranking module - Monthly leaderboards across all users.
//!
//! Two rankings exist: distinct training days per user (cached, see
//! `application::handlers::ranking::RankingCache`) and total lifted volume
//! per user (computed on demand).

mod entries;
mod errors;
mod period;
mod snapshot;

pub use entries::{GymDaysEntry, TotalVolumeEntry};
pub use errors::RankingError;
pub use period::{RankingPeriod, RANKING_YEARS};
pub use snapshot::{is_fresh, RankingSnapshot};
