//! Habit CRUD handlers

use axum::{extract::State, Json};
use habit_service::dto::{CreateHabitRequest, HabitResponse, MessageResponse, UpdateHabitRequest};
use habit_service::HabitService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// POST /api/habits
pub async fn create_habit(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateHabitRequest>,
) -> ApiResult<Created<Json<HabitResponse>>> {
    let habit = HabitService::new(state.service_context())
        .create(auth.user_id, request)
        .await?;
    Ok(Created(Json(habit)))
}

/// GET /api/habits
pub async fn list_habits(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<HabitResponse>>> {
    let habits = HabitService::new(state.service_context())
        .list(auth.user_id)
        .await?;
    Ok(Json(habits))
}

/// GET /api/habits/:id
pub async fn get_habit(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(habit_id): IdPath,
) -> ApiResult<Json<HabitResponse>> {
    let habit = HabitService::new(state.service_context())
        .get(auth.user_id, habit_id)
        .await?;
    Ok(Json(habit))
}

/// PUT /api/habits/:id
pub async fn update_habit(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(habit_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateHabitRequest>,
) -> ApiResult<Json<HabitResponse>> {
    let habit = HabitService::new(state.service_context())
        .update(auth.user_id, habit_id, request)
        .await?;
    Ok(Json(habit))
}

/// DELETE /api/habits/:id
pub async fn delete_habit(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(habit_id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let body = HabitService::new(state.service_context())
        .delete(auth.user_id, habit_id)
        .await?;
    Ok(Json(body))
}
