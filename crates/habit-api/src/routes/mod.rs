//! Route definitions
//!
//! The API lives under `/api`; the banner and health probes sit at the root
//! so they skip rate limiting.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, gamification, habits, health, logs, progress};
use crate::state::AppState;

/// Rate-limited API routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Banner and probes, mounted outside the rate limiter
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(habit_routes())
        .merge(log_routes())
        .merge(progress_routes())
        .merge(gamification_routes())
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/me", get(auth::me))
}

fn habit_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/habits",
            get(habits::list_habits).post(habits::create_habit),
        )
        .route(
            "/habits/:id",
            get(habits::get_habit)
                .put(habits::update_habit)
                .delete(habits::delete_habit),
        )
}

fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/logs", post(logs::create_log))
        .route("/logs/:habit_id", get(logs::habit_progress))
}

fn progress_routes() -> Router<AppState> {
    Router::new()
        .route("/progress/weekly", get(progress::weekly))
        .route("/progress/monthly", get(progress::monthly))
        .route("/progress/calendar", get(progress::calendar))
}

fn gamification_routes() -> Router<AppState> {
    Router::new()
        .route("/gamification/stats", get(gamification::stats))
        .route("/gamification/award-xp", post(gamification::award_xp))
        .route("/gamification/award-badge", post(gamification::award_badge))
        .route("/gamification/spin", post(gamification::spin))
        .route("/gamification/enable-spin", post(gamification::enable_spin))
}
