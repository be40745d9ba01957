//! Banner and health probes

use axum::{extract::State, http::StatusCode, Json};
use habit_service::dto::{ApiInfoResponse, HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// GET /
pub async fn root(State(state): State<AppState>) -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        message: format!("{} API is running", state.config().app.name),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Liveness probe
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness probe; 503 until the database answers
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let db_healthy = match state.service_context().pool() {
        Some(pool) => pool.acquire().await.is_ok(),
        None => false,
    };

    let status = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(ReadinessResponse::ready(db_healthy)))
}
