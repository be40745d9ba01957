//! Gamification handlers

use axum::{extract::State, Json};
use habit_service::dto::{
    AwardBadgeRequest, AwardBadgeResponse, AwardXpRequest, AwardXpResponse, EnableSpinResponse,
    SpinResponse, StatsResponse,
};
use habit_service::GamificationService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/gamification/stats
pub async fn stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<StatsResponse>> {
    let body = GamificationService::new(state.service_context())
        .stats(auth.user_id)
        .await?;
    Ok(Json(body))
}

/// POST /api/gamification/award-xp
pub async fn award_xp(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<AwardXpRequest>,
) -> ApiResult<Json<AwardXpResponse>> {
    let body = GamificationService::new(state.service_context())
        .award_xp(auth.user_id, request)
        .await?;
    Ok(Json(body))
}

/// POST /api/gamification/award-badge
pub async fn award_badge(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<AwardBadgeRequest>,
) -> ApiResult<Json<AwardBadgeResponse>> {
    let body = GamificationService::new(state.service_context())
        .award_badge(auth.user_id, request)
        .await?;
    Ok(Json(body))
}

/// POST /api/gamification/spin
pub async fn spin(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<SpinResponse>> {
    let body = GamificationService::new(state.service_context())
        .spin(auth.user_id)
        .await?;
    Ok(Json(body))
}

/// Unlock today's spin. There is no check on what earned it.
///
/// POST /api/gamification/enable-spin
pub async fn enable_spin(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<EnableSpinResponse>> {
    let body = GamificationService::new(state.service_context())
        .enable_spin(auth.user_id)
        .await?;
    Ok(Json(body))
}
