//! Ranking handlers.
//!
//! - Gym-days ranking of the current month, served through `RankingCache`
//! - Total-volume ranking of any month, computed on demand

mod get_gym_days_ranking;
mod get_total_volume_ranking;
mod ranking_cache;

#[cfg(test)]
pub(crate) mod test_support;

pub use get_gym_days_ranking::{
    GetGymDaysRankingHandler, GetGymDaysRankingQuery, GymDaysRankingResult, RankingSource,
};
pub use get_total_volume_ranking::{
    GetTotalVolumeRankingHandler, GetTotalVolumeRankingQuery, TotalVolumeRankingResult,
};
pub use ranking_cache::RankingCache;
