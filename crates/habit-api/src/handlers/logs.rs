//! Habit log handlers

use axum::{extract::State, http::StatusCode, Json};
use habit_service::dto::{CreateLogRequest, HabitProgressResponse, LogCreatedResponse};
use habit_service::LogService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// 201 for a new log, 200 when the day was already logged
///
/// POST /api/logs
pub async fn create_log(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateLogRequest>,
) -> ApiResult<(StatusCode, Json<LogCreatedResponse>)> {
    let body = LogService::new(state.service_context())
        .create_log(auth.user_id, request)
        .await?;
    let status = if body.already_completed {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    Ok((status, Json(body)))
}

/// GET /api/logs/:habitId
pub async fn habit_progress(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(habit_id): IdPath,
) -> ApiResult<Json<HabitProgressResponse>> {
    let body = LogService::new(state.service_context())
        .habit_progress(auth.user_id, habit_id)
        .await?;
    Ok(Json(body))
}
