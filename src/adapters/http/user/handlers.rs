//! HTTP handlers for user endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, internal_error, ApiJson, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::user::{
    GetHomeSummaryHandler, GetHomeSummaryQuery, GetProfileHandler, GetProfileQuery, LoginCommand,
    LoginHandler, SignupCommand, SignupHandler, UpdateProfileCommand, UpdateProfileHandler,
};
use crate::domain::foundation::ErrorCode;
use crate::domain::user::UserError;

use super::dto::{
    AuthResponse, CredentialsRequest, HomeSummaryResponse, ProfileResponse, UpdateProfileRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct UserHandlers {
    signup_handler: Arc<SignupHandler>,
    login_handler: Arc<LoginHandler>,
    get_profile_handler: Arc<GetProfileHandler>,
    update_profile_handler: Arc<UpdateProfileHandler>,
    home_summary_handler: Arc<GetHomeSummaryHandler>,
}

impl UserHandlers {
    pub fn new(
        signup_handler: Arc<SignupHandler>,
        login_handler: Arc<LoginHandler>,
        get_profile_handler: Arc<GetProfileHandler>,
        update_profile_handler: Arc<UpdateProfileHandler>,
        home_summary_handler: Arc<GetHomeSummaryHandler>,
    ) -> Self {
        Self {
            signup_handler,
            login_handler,
            get_profile_handler,
            update_profile_handler,
            home_summary_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /signup - Register and receive a token
pub async fn signup(
    State(handlers): State<UserHandlers>,
    ApiJson(req): ApiJson<CredentialsRequest>,
) -> Response {
    let cmd = SignupCommand {
        email: req.email,
        password: req.password,
    };

    match handlers.signup_handler.handle(cmd).await {
        Ok(result) => (StatusCode::CREATED, Json(AuthResponse::from(result))).into_response(),
        Err(e) => handle_user_error(e),
    }
}

/// POST /login - Exchange credentials for a token
pub async fn login(
    State(handlers): State<UserHandlers>,
    ApiJson(req): ApiJson<CredentialsRequest>,
) -> Response {
    let cmd = LoginCommand {
        email: req.email,
        password: req.password,
    };

    match handlers.login_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(AuthResponse::from(result))).into_response(),
        Err(e) => handle_user_error(e),
    }
}

/// GET /profile
pub async fn get_profile(
    State(handlers): State<UserHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetProfileQuery { user_id: user.id };

    match handlers.get_profile_handler.handle(query).await {
        Ok(profile) => (StatusCode::OK, Json(ProfileResponse::from(&profile))).into_response(),
        Err(e) => handle_user_error(e),
    }
}

/// PUT /profile - Overwrite height and goal weight
pub async fn update_profile(
    State(handlers): State<UserHandlers>,
    RequireAuth(user): RequireAuth,
    ApiJson(req): ApiJson<UpdateProfileRequest>,
) -> Response {
    let cmd = UpdateProfileCommand {
        user_id: user.id,
        height_cm: req.height_cm,
        goal_weight_kg: req.goal_weight_kg,
    };

    match handlers.update_profile_handler.handle(cmd).await {
        Ok(profile) => (StatusCode::OK, Json(ProfileResponse::from(&profile))).into_response(),
        Err(e) => handle_user_error(e),
    }
}

/// GET /home/summary
pub async fn home_summary(
    State(handlers): State<UserHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetHomeSummaryQuery { user_id: user.id };

    match handlers.home_summary_handler.handle(query).await {
        Ok(view) => (StatusCode::OK, Json(HomeSummaryResponse::from(view))).into_response(),
        Err(e) => handle_user_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Maps user errors to HTTP responses.
pub fn handle_user_error(error: UserError) -> Response {
    let message = error.to_string();
    match error {
        UserError::ValidationFailed(_) => {
            error_response(StatusCode::BAD_REQUEST, ErrorResponse::validation(message))
        }
        UserError::AlreadyExists(_) => error_response(
            StatusCode::CONFLICT,
            ErrorResponse::new("USER_ALREADY_EXISTS", message),
        ),
        UserError::InvalidCredentials => {
            error_response(StatusCode::UNAUTHORIZED, ErrorResponse::unauthorized(message))
        }
        UserError::NotFound(_) => error_response(
            StatusCode::NOT_FOUND,
            ErrorResponse::from_code(ErrorCode::UserNotFound, message),
        ),
        UserError::Infrastructure(cause) => internal_error(cause),
    }
}
