//! Request DTOs for API endpoints
//!
//! Field names are camelCase on the wire. Types that carry their own format
//! (category, frequency, weekdays, IDs) are rejected by serde; length and
//! range rules are checked with `validator`.

use chrono::Weekday;
use habit_core::entities::{Category, Frequency};
use habit_core::Snowflake;
use serde::Deserialize;
use validator::{Validate, ValidationError};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Any `role` in the body is ignored; new accounts are always `user`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(min = 1, max = 50, message = "Name must be 1-50 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

// ============================================================================
// Habit Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHabitRequest {
    #[validate(
        length(min = 1, max = 100, message = "Habit name must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    pub category: Category,

    #[serde(default)]
    pub frequency: Frequency,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    #[serde(default)]
    pub custom_days: Vec<Weekday>,

    /// `YYYY-MM-DD` or an ISO timestamp; defaults to today
    pub start_date: Option<String>,

    #[serde(default)]
    pub reminder_enabled: bool,

    /// `HH:MM`, 24-hour
    pub reminder_time: Option<String>,

    #[serde(default)]
    pub reminder_days: Vec<Weekday>,
}

/// Partial update; absent fields are left unchanged. An empty
/// `reminderTime` clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHabitRequest {
    #[validate(
        length(min = 1, max = 100, message = "Habit name must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,

    pub category: Option<Category>,

    pub frequency: Option<Frequency>,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    pub custom_days: Option<Vec<Weekday>>,

    pub start_date: Option<String>,

    pub reminder_enabled: Option<bool>,

    pub reminder_time: Option<String>,

    pub reminder_days: Option<Vec<Weekday>>,
}

// ============================================================================
// Log Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogRequest {
    pub habit_id: Snowflake,

    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,

    pub completed: Option<bool>,
}

// ============================================================================
// Progress Requests
// ============================================================================

/// Query string of the calendar view; both default to the current month
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CalendarQuery {
    #[validate(range(min = 1970, max = 9999, message = "Year must be between 1970 and 9999"))]
    pub year: Option<i32>,

    #[validate(range(min = 1, max = 12, message = "Month must be between 1 and 12"))]
    pub month: Option<u32>,
}

// ============================================================================
// Gamification Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AwardXpRequest {
    #[validate(range(min = 1, max = 10_000, message = "XP amount must be between 1 and 10000"))]
    pub amount: i64,

    #[validate(length(max = 100, message = "Reason must be at most 100 characters"))]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AwardBadgeRequest {
    #[validate(
        length(min = 1, max = 64, message = "Badge ID must be 1-64 characters"),
        custom(function = "not_blank")
    )]
    pub badge_id: String,
}
