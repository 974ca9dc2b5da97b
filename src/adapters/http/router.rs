//! Application router.
//!
//! Wires every port into its application handlers, groups those into the
//! per-feature handler bundles and applies the cross-cutting layers.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Method, Request},
    middleware,
    routing::get,
    Router,
};
use chrono::FixedOffset;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::exercise::ListExercisesHandler;
use crate::application::handlers::ranking::{
    GetGymDaysRankingHandler, GetTotalVolumeRankingHandler, RankingCache,
};
use crate::application::handlers::social::{
    GetTimelineHandler, LikeRecordHandler, UnlikeRecordHandler,
};
use crate::application::handlers::user::{
    GetHomeSummaryHandler, GetProfileHandler, LoginHandler, SignupHandler, UpdateProfileHandler,
};
use crate::application::handlers::workout::{
    CreateRecordHandler, DeleteRecordHandler, GetDailyRecordsHandler, GetExerciseHistoryHandler,
    GetRecordDaysHandler, UpdateRecordHandler,
};
use crate::config::{AppConfig, ValidationError};
use crate::ports::{
    ExerciseRepository, LikeRepository, PasswordHasher, RankingReader, SessionValidator,
    SummaryReader, TimelineReader, TokenIssuer, UserRepository, WorkoutReader, WorkoutRepository,
};

use super::exercise::{exercise_routes, ExerciseHandlers};
use super::middleware::{auth_middleware, AuthState};
use super::ranking::{ranking_routes, RankingHandlers};
use super::social::{social_routes, SocialHandlers};
use super::user::{user_routes, UserHandlers};
use super::workout::{workout_routes, WorkoutHandlers};

/// Every outbound port the HTTP surface needs.
#[derive(Clone)]
pub struct Ports {
    pub users: Arc<dyn UserRepository>,
    pub exercises: Arc<dyn ExerciseRepository>,
    pub workouts: Arc<dyn WorkoutRepository>,
    pub workout_reader: Arc<dyn WorkoutReader>,
    pub likes: Arc<dyn LikeRepository>,
    pub timeline: Arc<dyn TimelineReader>,
    pub summary: Arc<dyn SummaryReader>,
    pub rankings: Arc<dyn RankingReader>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenIssuer>,
    pub sessions: Arc<dyn SessionValidator>,
}

/// Router-level settings taken from configuration.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    /// Reference zone for "current month" in rankings.
    pub zone: FixedOffset,
    pub refresh_timeout: Duration,
    pub request_timeout: Duration,
    /// Empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl RouterSettings {
    pub fn from_config(config: &AppConfig) -> Result<Self, ValidationError> {
        Ok(Self {
            zone: config.ranking.zone()?,
            refresh_timeout: config.ranking.refresh_timeout(),
            request_timeout: Duration::from_secs(config.server.request_timeout_secs),
            cors_origins: config.server.cors_origins_list(),
        })
    }
}

/// Builds the full application router.
///
/// The ranking cache is passed in so callers (and tests) can observe it.
pub fn build_router(ports: Ports, cache: Arc<RankingCache>, settings: RouterSettings) -> Router {
    let user_handlers = UserHandlers::new(
        Arc::new(SignupHandler::new(
            ports.users.clone(),
            ports.hasher.clone(),
            ports.tokens.clone(),
        )),
        Arc::new(LoginHandler::new(
            ports.users.clone(),
            ports.hasher.clone(),
            ports.tokens.clone(),
        )),
        Arc::new(GetProfileHandler::new(ports.users.clone())),
        Arc::new(UpdateProfileHandler::new(ports.users.clone())),
        Arc::new(GetHomeSummaryHandler::new(ports.summary.clone())),
    );

    let workout_handlers = WorkoutHandlers::new(
        Arc::new(CreateRecordHandler::new(ports.workouts.clone())),
        Arc::new(UpdateRecordHandler::new(ports.workouts.clone())),
        Arc::new(DeleteRecordHandler::new(ports.workouts.clone())),
        Arc::new(GetDailyRecordsHandler::new(ports.workout_reader.clone())),
        Arc::new(GetRecordDaysHandler::new(ports.workout_reader.clone())),
        Arc::new(GetExerciseHistoryHandler::new(ports.workout_reader.clone())),
    );

    let social_handlers = SocialHandlers::new(
        Arc::new(GetTimelineHandler::new(ports.timeline.clone())),
        Arc::new(LikeRecordHandler::new(ports.likes.clone())),
        Arc::new(UnlikeRecordHandler::new(ports.likes.clone())),
    );

    let ranking_handlers = RankingHandlers::new(
        Arc::new(GetGymDaysRankingHandler::new(
            ports.rankings.clone(),
            cache,
            settings.zone,
            settings.refresh_timeout,
        )),
        Arc::new(GetTotalVolumeRankingHandler::new(
            ports.rankings.clone(),
            settings.zone,
        )),
    );

    let exercise_handlers =
        ExerciseHandlers::new(Arc::new(ListExercisesHandler::new(ports.exercises.clone())));

    let auth_state: AuthState = ports.sessions.clone();
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/health", get(health))
        .merge(user_routes(user_handlers))
        .merge(exercise_routes(exercise_handlers))
        .merge(workout_routes(workout_handlers))
        .merge(social_routes(social_handlers))
        .merge(ranking_routes(ranking_handlers))
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(cors_layer(&settings.cors_origins))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

const REQUEST_ID_HEADER: &str = "x-request-id";

fn request_span(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

async fn health() -> &'static str {
    "ok"
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "cors_origin_ignored");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60))
}
