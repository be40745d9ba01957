//! # habit-core
//!
//! Domain layer: entities, value objects, repository traits, and the pure
//! rules for streaks, progress reports, and gamification.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod analytics;
pub mod entities;
pub mod error;
pub mod gamification;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use analytics::{calculate_streaks, DateRange, MonthlyReport, StreakSummary, WeeklyReport};
pub use entities::{parse_log_date, Category, Frequency, Habit, HabitLog, Role, User};
pub use error::DomainError;
pub use gamification::{level_for_xp, SpinReward, XP_PER_LEVEL};
pub use traits::{HabitLogRepository, HabitRepository, RepoResult, UserRepository};
pub use value_objects::{
    Clock, FixedClock, Snowflake, SnowflakeGenerator, SnowflakeParseError, SystemClock,
};
