//! HTTP routes for ranking endpoints.

use axum::{routing::get, Router};

use super::handlers::{gym_days_ranking, total_volume_ranking, RankingHandlers};

pub fn ranking_routes(handlers: RankingHandlers) -> Router {
    Router::new()
        .route("/rankings/gym_days", get(gym_days_ranking))
        .route("/rankings/total_volume", get(total_volume_ranking))
        .with_state(handlers)
}
