//! Progress report handlers

use axum::{extract::State, Json};
use habit_core::{MonthlyReport, WeeklyReport};
use habit_service::dto::{CalendarQuery, CalendarResponse};
use habit_service::ProgressService;

use crate::extractors::{AuthUser, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/progress/weekly
pub async fn weekly(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<WeeklyReport>> {
    let report = ProgressService::new(state.service_context())
        .weekly(auth.user_id)
        .await?;
    Ok(Json(report))
}

/// GET /api/progress/monthly
pub async fn monthly(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MonthlyReport>> {
    let report = ProgressService::new(state.service_context())
        .monthly(auth.user_id)
        .await?;
    Ok(Json(report))
}

/// GET /api/progress/calendar?year=&month=
pub async fn calendar(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedQuery(query): ValidatedQuery<CalendarQuery>,
) -> ApiResult<Json<CalendarResponse>> {
    let body = ProgressService::new(state.service_context())
        .calendar(auth.user_id, query)
        .await?;
    Ok(Json(body))
}
