use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct HabitLogModel {
    pub id: i64,
    pub habit_id: i64,
    pub user_id: i64,
    pub date: NaiveDate,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
