//! Habit log entity - one completion record per habit per calendar day

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitLog {
    pub id: Snowflake,
    pub habit_id: Snowflake,
    pub user_id: Snowflake,
    pub date: NaiveDate,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HabitLog {
    pub fn new(
        id: Snowflake,
        habit_id: Snowflake,
        user_id: Snowflake,
        date: NaiveDate,
        completed: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            habit_id,
            user_id,
            date,
            completed,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Parse a client-supplied log date.
///
/// Accepts `YYYY-MM-DD` or a full ISO-8601 timestamp; anything after the
/// `T` separator is discarded so the calendar day is taken as written.
pub fn parse_log_date(raw: &str) -> Result<NaiveDate, DomainError> {
    let day = raw.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(raw.to_string()))
}
