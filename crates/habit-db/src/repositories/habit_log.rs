//! PostgreSQL implementation of HabitLogRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use habit_core::entities::HabitLog;
use habit_core::error::DomainError;
use habit_core::traits::{HabitLogRepository, RepoResult};
use habit_core::value_objects::Snowflake;

use crate::models::HabitLogModel;

use super::error::{map_db_error, map_unique_violation};

#[derive(Clone)]
pub struct PgHabitLogRepository {
    pool: PgPool,
}

impl PgHabitLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HabitLogRepository for PgHabitLogRepository {
    #[instrument(skip(self))]
    async fn find_by_habit_and_date(
        &self,
        habit_id: Snowflake,
        date: NaiveDate,
    ) -> RepoResult<Option<HabitLog>> {
        let row = sqlx::query_as::<_, HabitLogModel>(
            r"
            SELECT id, habit_id, user_id, date, completed, created_at, updated_at
            FROM habit_logs
            WHERE habit_id = $1 AND date = $2
            ",
        )
        .bind(habit_id.into_inner())
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(HabitLog::from))
    }

    #[instrument(skip(self, log), fields(habit_id = %log.habit_id, date = %log.date))]
    async fn create(&self, log: &HabitLog) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO habit_logs (id, habit_id, user_id, date, completed, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(log.id.into_inner())
        .bind(log.habit_id.into_inner())
        .bind(log.user_id.into_inner())
        .bind(log.date)
        .bind(log.completed)
        .bind(log.created_at)
        .bind(log.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::LogAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_habit(&self, habit_id: Snowflake) -> RepoResult<Vec<HabitLog>> {
        let rows = sqlx::query_as::<_, HabitLogModel>(
            r"
            SELECT id, habit_id, user_id, date, completed, created_at, updated_at
            FROM habit_logs
            WHERE habit_id = $1
            ORDER BY date DESC
            ",
        )
        .bind(habit_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(HabitLog::from).collect())
    }

    #[instrument(skip(self))]
    async fn completed_dates(&self, habit_id: Snowflake) -> RepoResult<Vec<NaiveDate>> {
        sqlx::query_scalar::<_, NaiveDate>(
            r"
            SELECT date FROM habit_logs
            WHERE habit_id = $1 AND completed
            ORDER BY date
            ",
        )
        .bind(habit_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_completed_in_range(
        &self,
        user_id: Snowflake,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<HabitLog>> {
        let rows = sqlx::query_as::<_, HabitLogModel>(
            r"
            SELECT id, habit_id, user_id, date, completed, created_at, updated_at
            FROM habit_logs
            WHERE user_id = $1 AND completed AND date BETWEEN $2 AND $3
            ORDER BY date
            ",
        )
        .bind(user_id.into_inner())
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(HabitLog::from).collect())
    }
}
