//! HTTP handlers for ranking endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, internal_error, ApiQuery, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::ranking::{
    GetGymDaysRankingHandler, GetGymDaysRankingQuery, GetTotalVolumeRankingHandler,
    GetTotalVolumeRankingQuery,
};
use crate::domain::foundation::Timestamp;
use crate::domain::ranking::RankingError;

use super::dto::TotalVolumeQuery;

#[derive(Clone)]
pub struct RankingHandlers {
    gym_days_handler: Arc<GetGymDaysRankingHandler>,
    total_volume_handler: Arc<GetTotalVolumeRankingHandler>,
}

impl RankingHandlers {
    pub fn new(
        gym_days_handler: Arc<GetGymDaysRankingHandler>,
        total_volume_handler: Arc<GetTotalVolumeRankingHandler>,
    ) -> Self {
        Self {
            gym_days_handler,
            total_volume_handler,
        }
    }
}

/// GET /rankings/gym_days - Current month, served through the ranking cache
pub async fn gym_days_ranking(
    State(handlers): State<RankingHandlers>,
    RequireAuth(_user): RequireAuth,
) -> Response {
    let query = GetGymDaysRankingQuery {
        as_of: Timestamp::now(),
    };

    // The refresh handle is dropped; the task keeps running detached.
    match handlers.gym_days_handler.handle(query).await {
        Ok(result) => (StatusCode::OK, Json(result.rows)).into_response(),
        Err(e) => handle_ranking_error(e),
    }
}

/// GET /rankings/total_volume?year=&month=
pub async fn total_volume_ranking(
    State(handlers): State<RankingHandlers>,
    RequireAuth(_user): RequireAuth,
    ApiQuery(params): ApiQuery<TotalVolumeQuery>,
) -> Response {
    let query = GetTotalVolumeRankingQuery {
        year: params.year,
        month: params.month,
        as_of: Timestamp::now(),
    };

    match handlers.total_volume_handler.handle(query).await {
        Ok(result) => (StatusCode::OK, Json(result.rows)).into_response(),
        Err(e) => handle_ranking_error(e),
    }
}

/// Maps ranking errors to HTTP responses.
pub fn handle_ranking_error(error: RankingError) -> Response {
    let message = error.to_string();
    match error {
        RankingError::InvalidPeriod(_) => {
            error_response(StatusCode::BAD_REQUEST, ErrorResponse::validation(message))
        }
        RankingError::Infrastructure(cause) => internal_error(cause),
    }
}
