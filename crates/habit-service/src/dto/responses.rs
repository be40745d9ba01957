//! Response DTOs for API endpoints
//!
//! Field names are camelCase. Snowflake IDs serialize as strings and
//! calendar dates as `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use habit_core::analytics::StreakSummary;
use habit_core::entities::{Category, Frequency, Role};
use habit_core::{Snowflake, SpinReward};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Body carrying only a human-readable message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Banner served at `/`
#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    pub message: String,
    pub version: &'static str,
}

// ============================================================================
// Auth Responses
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub xp: i64,
    pub level: i64,
    pub xp_to_next_level: i64,
    pub badges: Vec<String>,
    pub daily_spin_available: bool,
    pub last_spin_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

// ============================================================================
// Habit Responses
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitResponse {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub frequency: Frequency,
    pub custom_days: Vec<Weekday>,
    pub start_date: NaiveDate,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub reminder_enabled: bool,
    /// `HH:MM`
    pub reminder_time: Option<String>,
    pub reminder_days: Vec<Weekday>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Log Responses
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitLogResponse {
    pub id: Snowflake,
    pub habit_id: Snowflake,
    pub user_id: Snowflake,
    pub date: NaiveDate,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Outcome of `POST /api/logs`. `streaks` is only present for a new log.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogCreatedResponse {
    pub message: &'static str,
    pub log: HabitLogResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streaks: Option<StreakSummary>,
    pub already_completed: bool,
}

impl LogCreatedResponse {
    pub const CREATED: &'static str = "Habit marked as completed";
    pub const DUPLICATE: &'static str = "Habit already marked as completed for this date";
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitProgressResponse {
    pub habit_id: Snowflake,
    pub habit_name: String,
    pub frequency: Frequency,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub total_completed: usize,
    pub logs: Vec<HabitLogResponse>,
}

// ============================================================================
// Progress Responses
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    pub habits: Vec<HabitResponse>,
    pub logs: Vec<HabitLogResponse>,
}

// ============================================================================
// Gamification Responses
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub xp: i64,
    pub level: i64,
    pub xp_to_next_level: i64,
    pub badges: Vec<String>,
    pub daily_spin_available: bool,
    pub last_spin_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardXpResponse {
    pub message: String,
    pub xp: i64,
    pub level: i64,
    pub xp_to_next_level: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardBadgeResponse {
    pub message: &'static str,
    /// Set only when the badge was newly added
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub badges: Vec<String>,
    pub newly_awarded: bool,
}

#[derive(Debug, Serialize)]
pub struct SpinResponse {
    pub message: &'static str,
    pub reward: SpinReward,
    pub xp: i64,
    pub level: i64,
    pub badges: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableSpinResponse {
    pub message: &'static str,
    pub daily_spin_available: bool,
}

// ============================================================================
// Health Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: &'static str,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" },
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" },
            },
        }
    }
}
