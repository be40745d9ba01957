//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{Habit, HabitLog, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Lookup by normalized email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Insert a new user; fails with `EmailAlreadyExists` on a duplicate email
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Persist XP, level, badges, and spin state, but only while the stored
    /// row still holds the values of `previous`. Returns `false` when another
    /// write got there first; fails with `UserNotFound` if the user is gone.
    async fn update_gamification(&self, previous: &User, user: &User) -> RepoResult<bool>;
}

// ============================================================================
// Habit Repository
// ============================================================================

#[async_trait]
pub trait HabitRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Habit>>;

    /// All habits of a user, newest first
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Habit>>;

    async fn count_by_user(&self, user_id: Snowflake) -> RepoResult<i64>;

    async fn create(&self, habit: &Habit) -> RepoResult<()>;

    /// Update user-editable fields
    async fn update(&self, habit: &Habit) -> RepoResult<()>;

    /// Overwrite the cached streak columns
    async fn update_streaks(&self, id: Snowflake, current: i32, longest: i32) -> RepoResult<()>;

    /// Delete a habit; its logs go with it
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Habit Log Repository
// ============================================================================

#[async_trait]
pub trait HabitLogRepository: Send + Sync {
    async fn find_by_habit_and_date(
        &self,
        habit_id: Snowflake,
        date: NaiveDate,
    ) -> RepoResult<Option<HabitLog>>;

    /// Insert a log; fails with `LogAlreadyExists` if (habit, date) is taken
    async fn create(&self, log: &HabitLog) -> RepoResult<()>;

    /// Logs for a habit, newest date first
    async fn find_by_habit(&self, habit_id: Snowflake) -> RepoResult<Vec<HabitLog>>;

    /// Dates of completed logs for a habit
    async fn completed_dates(&self, habit_id: Snowflake) -> RepoResult<Vec<NaiveDate>>;

    /// Completed logs of all of a user's habits within `[start, end]`
    async fn find_completed_in_range(
        &self,
        user_id: Snowflake,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<HabitLog>>;
}
