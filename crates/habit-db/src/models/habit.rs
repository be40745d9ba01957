use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct HabitModel {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub frequency: String,
    /// Weekday abbreviations, `Mon`..`Sun`
    pub custom_days: Vec<String>,
    pub start_date: NaiveDate,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub reminder_enabled: bool,
    pub reminder_time: Option<NaiveTime>,
    pub reminder_days: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
