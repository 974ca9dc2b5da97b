//! HTTP handlers for social endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, internal_error, ApiPath, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::social::{
    GetTimelineHandler, GetTimelineQuery, LikeRecordCommand, LikeRecordHandler,
    UnlikeRecordCommand, UnlikeRecordHandler,
};
use crate::domain::foundation::{ErrorCode, RecordId};
use crate::domain::social::SocialError;

use super::dto::{LikeResponse, TimelineEntryResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SocialHandlers {
    timeline_handler: Arc<GetTimelineHandler>,
    like_handler: Arc<LikeRecordHandler>,
    unlike_handler: Arc<UnlikeRecordHandler>,
}

impl SocialHandlers {
    pub fn new(
        timeline_handler: Arc<GetTimelineHandler>,
        like_handler: Arc<LikeRecordHandler>,
        unlike_handler: Arc<UnlikeRecordHandler>,
    ) -> Self {
        Self {
            timeline_handler,
            like_handler,
            unlike_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /timeline - Public records of every user
pub async fn timeline(
    State(handlers): State<SocialHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetTimelineQuery { viewer: user.id };

    match handlers.timeline_handler.handle(query).await {
        Ok(entries) => {
            let response: Vec<TimelineEntryResponse> =
                entries.into_iter().map(TimelineEntryResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_social_error(e),
    }
}

/// POST /records/:record_id/like
pub async fn like_record(
    State(handlers): State<SocialHandlers>,
    RequireAuth(user): RequireAuth,
    ApiPath(record_id): ApiPath<RecordId>,
) -> Response {
    let cmd = LikeRecordCommand {
        user_id: user.id,
        record_id,
    };

    match handlers.like_handler.handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(LikeResponse::new(record_id, true))).into_response(),
        Err(e) => handle_social_error(e),
    }
}

/// DELETE /records/:record_id/like
pub async fn unlike_record(
    State(handlers): State<SocialHandlers>,
    RequireAuth(user): RequireAuth,
    ApiPath(record_id): ApiPath<RecordId>,
) -> Response {
    let cmd = UnlikeRecordCommand {
        user_id: user.id,
        record_id,
    };

    match handlers.unlike_handler.handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(LikeResponse::new(record_id, false))).into_response(),
        Err(e) => handle_social_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Maps social errors to HTTP responses.
pub fn handle_social_error(error: SocialError) -> Response {
    let message = error.to_string();
    match error {
        SocialError::RecordNotFound(_) => error_response(
            StatusCode::NOT_FOUND,
            ErrorResponse::from_code(ErrorCode::RecordNotFound, message),
        ),
        SocialError::PrivateRecord(_) => error_response(
            StatusCode::FORBIDDEN,
            ErrorResponse::from_code(ErrorCode::Forbidden, message),
        ),
        SocialError::Infrastructure(cause) => internal_error(cause),
    }
}
