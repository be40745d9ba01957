//! Habit entity

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::analytics::StreakSummary;
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Habit category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Health,
    Learning,
    Work,
    Personal,
    Fitness,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "Health",
            Self::Learning => "Learning",
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Fitness => "Fitness",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Health" => Ok(Self::Health),
            "Learning" => Ok(Self::Learning),
            "Work" => Ok(Self::Work),
            "Personal" => Ok(Self::Personal),
            "Fitness" => Ok(Self::Fitness),
            other => Err(DomainError::ValidationError(format!("unknown category: {other}"))),
        }
    }
}

/// How often the habit is meant to be performed.
///
/// Streaks are counted in consecutive calendar days for every variant;
/// `Weekly` and `Custom` schedules are stored but not yet honored by
/// [`calculate_streaks`](crate::analytics::calculate_streaks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    #[serde(rename = "custom")]
    Custom,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Daily" => Ok(Self::Daily),
            "Weekly" => Ok(Self::Weekly),
            "custom" => Ok(Self::Custom),
            other => Err(DomainError::ValidationError(format!("unknown frequency: {other}"))),
        }
    }
}

/// A habit owned by one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub frequency: Frequency,
    pub custom_days: Vec<Weekday>,
    pub start_date: NaiveDate,
    /// Cached from the log table; refreshed whenever logs are written or read
    pub current_streak: i32,
    pub longest_streak: i32,
    pub reminder_enabled: bool,
    pub reminder_time: Option<NaiveTime>,
    pub reminder_days: Vec<Weekday>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Habit {
    pub fn new(
        id: Snowflake,
        user_id: Snowflake,
        name: &str,
        category: Category,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            name: name.trim().to_string(),
            category,
            description: String::new(),
            frequency,
            custom_days: Vec::new(),
            start_date,
            current_streak: 0,
            longest_streak: 0,
            reminder_enabled: false,
            reminder_time: None,
            reminder_days: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }

    /// Fail with `NotHabitOwner` unless `user_id` owns this habit
    pub fn ensure_owner(&self, user_id: Snowflake) -> Result<(), DomainError> {
        if self.is_owned_by(user_id) {
            Ok(())
        } else {
            Err(DomainError::NotHabitOwner)
        }
    }

    /// Overwrite the streak cache. Returns `true` if it changed.
    pub fn apply_streaks(&mut self, streaks: StreakSummary) -> bool {
        let changed = self.current_streak != streaks.current_streak
            || self.longest_streak != streaks.longest_streak;
        self.current_streak = streaks.current_streak;
        self.longest_streak = streaks.longest_streak;
        changed
    }
}
