//! PostgreSQL implementation of HabitRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use habit_core::entities::Habit;
use habit_core::error::DomainError;
use habit_core::traits::{HabitRepository, RepoResult};
use habit_core::value_objects::Snowflake;

use crate::mappers::HabitColumns;
use crate::models::HabitModel;

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgHabitRepository {
    pool: PgPool,
}

impl PgHabitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HabitRepository for PgHabitRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Habit>> {
        let row = sqlx::query_as::<_, HabitModel>(
            r"
            SELECT id, user_id, name, category, description, frequency, custom_days, start_date,
                   current_streak, longest_streak, reminder_enabled, reminder_time, reminder_days,
                   created_at, updated_at
            FROM habits
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Habit::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Habit>> {
        let rows = sqlx::query_as::<_, HabitModel>(
            r"
            SELECT id, user_id, name, category, description, frequency, custom_days, start_date,
                   current_streak, longest_streak, reminder_enabled, reminder_time, reminder_days,
                   created_at, updated_at
            FROM habits
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Habit::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn count_by_user(&self, user_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM habits WHERE user_id = $1")
            .bind(user_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, habit), fields(habit_id = %habit.id))]
    async fn create(&self, habit: &Habit) -> RepoResult<()> {
        let cols = HabitColumns::new(habit);
        sqlx::query(
            r"
            INSERT INTO habits (id, user_id, name, category, description, frequency, custom_days,
                                start_date, current_streak, longest_streak, reminder_enabled,
                                reminder_time, reminder_days, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ",
        )
        .bind(cols.id)
        .bind(cols.user_id)
        .bind(cols.name)
        .bind(cols.category)
        .bind(cols.description)
        .bind(cols.frequency)
        .bind(&cols.custom_days)
        .bind(habit.start_date)
        .bind(habit.current_streak)
        .bind(habit.longest_streak)
        .bind(habit.reminder_enabled)
        .bind(habit.reminder_time)
        .bind(&cols.reminder_days)
        .bind(habit.created_at)
        .bind(habit.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, habit), fields(habit_id = %habit.id))]
    async fn update(&self, habit: &Habit) -> RepoResult<()> {
        let cols = HabitColumns::new(habit);
        let result = sqlx::query(
            r"
            UPDATE habits
            SET name = $2, category = $3, description = $4, frequency = $5, custom_days = $6,
                start_date = $7, reminder_enabled = $8, reminder_time = $9, reminder_days = $10,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(cols.id)
        .bind(cols.name)
        .bind(cols.category)
        .bind(cols.description)
        .bind(cols.frequency)
        .bind(&cols.custom_days)
        .bind(habit.start_date)
        .bind(habit.reminder_enabled)
        .bind(habit.reminder_time)
        .bind(&cols.reminder_days)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::HabitNotFound(habit.id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_streaks(&self, id: Snowflake, current: i32, longest: i32) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE habits
            SET current_streak = $2, longest_streak = $3, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(current)
        .bind(longest)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // habit_logs rows go with it via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM habits WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::HabitNotFound(id));
        }
        Ok(())
    }
}
