//! Authentication handlers

use axum::{extract::State, Json};
use habit_service::dto::{
    AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest, UserResponse,
};
use habit_service::AuthService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let response = AuthService::new(state.service_context()).register(request).await?;
    Ok(Created(Json(response)))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let response = AuthService::new(state.service_context()).login(request).await?;
    Ok(Json(response))
}

/// POST /api/auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let response = AuthService::new(state.service_context())
        .refresh_tokens(request)
        .await?;
    Ok(Json(response))
}

/// GET /api/auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<UserResponse>> {
    let user = AuthService::new(state.service_context()).me(auth.user_id).await?;
    Ok(Json(user))
}
