//! Request builders and response shapes used by the API tests

use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "TestPass123!";

/// Today as the server sees it (UTC)
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn days_ago(n: u64) -> NaiveDate {
    today() - Days::new(n)
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// Fresh account with an email no other test run will reuse
    pub fn unique() -> Self {
        let id = Uuid::new_v4().simple().to_string();
        Self {
            name: format!("Tester {}", &id[..8]),
            email: format!("test-{id}@example.com"),
            password: TEST_PASSWORD.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub xp: i64,
    pub level: i64,
    pub xp_to_next_level: i64,
    pub badges: Vec<String>,
    pub daily_spin_available: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHabitRequest {
    pub name: String,
    pub category: String,
    pub frequency: String,
    pub description: Option<String>,
}

impl CreateHabitRequest {
    pub fn daily(name: &str) -> Self {
        Self {
            name: name.to_string(),
            category: "Health".to_string(),
            frequency: "Daily".to_string(),
            description: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub category: String,
    pub frequency: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub reminder_time: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogRequest {
    pub habit_id: String,
    pub date: String,
}

impl CreateLogRequest {
    pub fn on(habit_id: &str, date: NaiveDate) -> Self {
        Self {
            habit_id: habit_id.to_string(),
            date: date.format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    pub current_streak: i32,
    pub longest_streak: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogCreatedResponse {
    pub message: String,
    pub log: Value,
    pub streaks: Option<StreakSummary>,
    pub already_completed: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitProgressResponse {
    pub habit_id: String,
    pub habit_name: String,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub total_completed: usize,
    pub logs: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
