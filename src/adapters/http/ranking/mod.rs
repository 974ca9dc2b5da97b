//! HTTP adapter for monthly rankings.

mod dto;
mod handlers;
mod routes;

pub use dto::TotalVolumeQuery;
pub use handlers::{handle_ranking_error, RankingHandlers};
pub use routes::ranking_routes;
