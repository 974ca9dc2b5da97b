//! HTTP handlers for workout record endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{
    error_response, internal_error, ApiJson, ApiPath, ApiQuery, ErrorResponse,
};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::workout::{
    CreateRecordCommand, CreateRecordHandler, DeleteRecordCommand, DeleteRecordHandler,
    GetDailyRecordsHandler, GetDailyRecordsQuery, GetExerciseHistoryHandler,
    GetExerciseHistoryQuery, GetRecordDaysHandler, GetRecordDaysQuery, UpdateRecordCommand,
    UpdateRecordHandler,
};
use crate::domain::foundation::{ErrorCode, ExerciseId, RecordId};
use crate::domain::workout::WorkoutError;

use super::dto::{
    DailyQuery, DailyRecordResponse, ExerciseSetResponse, RecordCommandResponse, RecordDaysQuery,
    RecordRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct WorkoutHandlers {
    create_handler: Arc<CreateRecordHandler>,
    update_handler: Arc<UpdateRecordHandler>,
    delete_handler: Arc<DeleteRecordHandler>,
    daily_handler: Arc<GetDailyRecordsHandler>,
    days_handler: Arc<GetRecordDaysHandler>,
    history_handler: Arc<GetExerciseHistoryHandler>,
}

impl WorkoutHandlers {
    pub fn new(
        create_handler: Arc<CreateRecordHandler>,
        update_handler: Arc<UpdateRecordHandler>,
        delete_handler: Arc<DeleteRecordHandler>,
        daily_handler: Arc<GetDailyRecordsHandler>,
        days_handler: Arc<GetRecordDaysHandler>,
        history_handler: Arc<GetExerciseHistoryHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            delete_handler,
            daily_handler,
            days_handler,
            history_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /training_records - Log a record with its sets
pub async fn create_record(
    State(handlers): State<WorkoutHandlers>,
    RequireAuth(user): RequireAuth,
    ApiJson(req): ApiJson<RecordRequest>,
) -> Response {
    let cmd = CreateRecordCommand {
        user_id: user.id,
        draft: req.into(),
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(result) => {
            let response = RecordCommandResponse {
                message: "Workout record created".to_string(),
                record_id: result.record.id().to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_workout_error(e),
    }
}

/// GET /training_records?date=YYYY-MM-DD
pub async fn list_daily_records(
    State(handlers): State<WorkoutHandlers>,
    RequireAuth(user): RequireAuth,
    ApiQuery(params): ApiQuery<DailyQuery>,
) -> Response {
    let query = GetDailyRecordsQuery {
        user_id: user.id,
        day: params.date,
    };

    match handlers.daily_handler.handle(query).await {
        Ok(records) => {
            let response: Vec<DailyRecordResponse> =
                records.into_iter().map(DailyRecordResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_workout_error(e),
    }
}

/// GET /training_records/days?year=&month=
pub async fn list_record_days(
    State(handlers): State<WorkoutHandlers>,
    RequireAuth(user): RequireAuth,
    ApiQuery(params): ApiQuery<RecordDaysQuery>,
) -> Response {
    let query = GetRecordDaysQuery {
        user_id: user.id,
        year: params.year,
        month: params.month,
    };

    match handlers.days_handler.handle(query).await {
        Ok(days) => (StatusCode::OK, Json(days)).into_response(),
        Err(e) => handle_workout_error(e),
    }
}

/// PUT /training_records/:id - Replace a record and all of its sets
pub async fn update_record(
    State(handlers): State<WorkoutHandlers>,
    RequireAuth(user): RequireAuth,
    ApiPath(record_id): ApiPath<RecordId>,
    ApiJson(req): ApiJson<RecordRequest>,
) -> Response {
    let cmd = UpdateRecordCommand {
        user_id: user.id,
        record_id,
        draft: req.into(),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(result) => {
            let response = RecordCommandResponse {
                message: "Workout record updated".to_string(),
                record_id: result.record.id().to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_workout_error(e),
    }
}

/// DELETE /training_records/:id
pub async fn delete_record(
    State(handlers): State<WorkoutHandlers>,
    RequireAuth(user): RequireAuth,
    ApiPath(record_id): ApiPath<RecordId>,
) -> Response {
    let cmd = DeleteRecordCommand {
        user_id: user.id,
        record_id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => {
            let response = RecordCommandResponse {
                message: "Workout record deleted".to_string(),
                record_id: record_id.to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_workout_error(e),
    }
}

/// GET /training_records/exercises/:exercise_id - Flat set history
pub async fn exercise_history(
    State(handlers): State<WorkoutHandlers>,
    RequireAuth(user): RequireAuth,
    ApiPath(exercise_id): ApiPath<ExerciseId>,
) -> Response {
    let query = GetExerciseHistoryQuery {
        user_id: user.id,
        exercise_id,
    };

    match handlers.history_handler.handle(query).await {
        Ok(rows) => {
            let response: Vec<ExerciseSetResponse> =
                rows.into_iter().map(ExerciseSetResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_workout_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Maps workout errors to HTTP responses.
pub fn handle_workout_error(error: WorkoutError) -> Response {
    let message = error.to_string();
    match error {
        WorkoutError::NoSets | WorkoutError::InvalidSetValue(_) | WorkoutError::ValidationFailed(_) => {
            error_response(StatusCode::BAD_REQUEST, ErrorResponse::validation(message))
        }
        WorkoutError::ExerciseNotFound(_) => error_response(
            StatusCode::NOT_FOUND,
            ErrorResponse::from_code(ErrorCode::ExerciseNotFound, message),
        ),
        WorkoutError::RecordNotFound(_) => error_response(
            StatusCode::NOT_FOUND,
            ErrorResponse::from_code(ErrorCode::RecordNotFound, message),
        ),
        WorkoutError::Infrastructure(cause) => internal_error(cause),
    }
}
