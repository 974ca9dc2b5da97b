//! JSON error bodies and request extractors that reject with them.
//!
//! Every failure leaves the API as `{ "code": "...", "message": "..." }`.
//! Client errors are logged at `warn`, server errors at `error`.

use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts, Request,
    },
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;

/// Standard error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn from_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(code.to_string(), message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::ValidationFailed, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::Unauthorized, message)
    }

    /// Generic body for 5xx; the cause is only logged.
    pub fn internal() -> Self {
        Self::from_code(ErrorCode::InternalError, "Internal server error")
    }
}

/// Builds the response and logs it by severity.
pub fn error_response(status: StatusCode, body: ErrorResponse) -> Response {
    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), code = %body.code, "request_failed");
    } else {
        tracing::warn!(status = status.as_u16(), code = %body.code, message = %body.message, "request_rejected");
    }
    (status, Json(body)).into_response()
}

/// 500 with the underlying cause logged but not exposed.
pub fn internal_error(cause: impl std::fmt::Display) -> Response {
    tracing::error!(error = %cause, "internal_error");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal())
}

// ════════════════════════════════════════════════════════════════════════════
// Extractors
// ════════════════════════════════════════════════════════════════════════════

/// `Json<T>` whose rejections are 400 `BAD_REQUEST` bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| ApiJson(value))
            .map_err(|rejection: JsonRejection| {
                error_response(StatusCode::BAD_REQUEST, ErrorResponse::bad_request(rejection.body_text()))
            })
    }
}

/// `Query<T>` whose rejections are 400 `BAD_REQUEST` bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        axum::extract::Query::<T>::from_request_parts(parts, state)
            .await
            .map(|axum::extract::Query(value)| ApiQuery(value))
            .map_err(|rejection: QueryRejection| {
                error_response(StatusCode::BAD_REQUEST, ErrorResponse::bad_request(rejection.body_text()))
            })
    }
}

/// `Path<T>` whose rejections (e.g. a malformed UUID) are 400 `BAD_REQUEST` bodies.
#[derive(Debug, Clone, Copy)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        axum::extract::Path::<T>::from_request_parts(parts, state)
            .await
            .map(|axum::extract::Path(value)| ApiPath(value))
            .map_err(|rejection: PathRejection| {
                error_response(StatusCode::BAD_REQUEST, ErrorResponse::bad_request(rejection.body_text()))
            })
    }
}
