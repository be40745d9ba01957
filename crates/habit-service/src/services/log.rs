//! Log service - daily completions and per-habit progress

use habit_core::entities::{parse_log_date, Habit, HabitLog};
use habit_core::{calculate_streaks, DomainError, Snowflake, StreakSummary};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::dto::{CreateLogRequest, HabitLogResponse, HabitProgressResponse, LogCreatedResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::habit::HabitService;

pub struct LogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LogService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a completion. A second log for the same habit and date is not
    /// an error; the existing log comes back with `already_completed` set.
    #[instrument(skip(self, request), fields(habit_id = %request.habit_id))]
    pub async fn create_log(
        &self,
        user_id: Snowflake,
        request: CreateLogRequest,
    ) -> ServiceResult<LogCreatedResponse> {
        request.validate()?;

        let habit = HabitService::new(self.ctx)
            .find_owned(user_id, request.habit_id)
            .await?;
        let date = parse_log_date(&request.date)?;

        if let Some(existing) = self.ctx.log_repo().find_by_habit_and_date(habit.id, date).await? {
            debug!(%date, "Habit already logged for date");
            return Ok(Self::duplicate(existing));
        }

        let log = HabitLog::new(
            self.ctx.generate_id(),
            habit.id,
            user_id,
            date,
            request.completed.unwrap_or(true),
        );

        match self.ctx.log_repo().create(&log).await {
            Ok(()) => {}
            // Lost a race with a concurrent insert for the same day
            Err(DomainError::LogAlreadyExists) => {
                let existing = self
                    .ctx
                    .log_repo()
                    .find_by_habit_and_date(habit.id, date)
                    .await?
                    .ok_or(DomainError::LogAlreadyExists)?;
                return Ok(Self::duplicate(existing));
            }
            Err(e) => return Err(e.into()),
        }

        let streaks = self.refresh_streaks(habit).await?;
        info!(
            log_id = %log.id,
            %date,
            current_streak = streaks.current_streak,
            "Habit completion logged"
        );

        Ok(LogCreatedResponse {
            message: LogCreatedResponse::CREATED,
            log: HabitLogResponse::from(log),
            streaks: Some(streaks),
            already_completed: false,
        })
    }

    /// Streaks and full log history of one habit, newest first
    #[instrument(skip(self))]
    pub async fn habit_progress(
        &self,
        user_id: Snowflake,
        habit_id: Snowflake,
    ) -> ServiceResult<HabitProgressResponse> {
        let habit = HabitService::new(self.ctx)
            .find_owned(user_id, habit_id)
            .await?;
        let logs = self.ctx.log_repo().find_by_habit(habit.id).await?;

        let habit_name = habit.name.clone();
        let frequency = habit.frequency;
        let streaks = self.refresh_streaks(habit).await?;

        Ok(HabitProgressResponse {
            habit_id,
            habit_name,
            frequency,
            current_streak: streaks.current_streak,
            longest_streak: streaks.longest_streak,
            total_completed: logs.iter().filter(|log| log.completed).count(),
            logs: logs.into_iter().map(HabitLogResponse::from).collect(),
        })
    }

    /// Recompute from every completed log and write the habit's cache if it moved
    async fn refresh_streaks(&self, mut habit: Habit) -> ServiceResult<StreakSummary> {
        let dates = self.ctx.log_repo().completed_dates(habit.id).await?;
        let streaks = calculate_streaks(dates, self.ctx.today());

        if habit.apply_streaks(streaks) {
            self.ctx
                .habit_repo()
                .update_streaks(habit.id, habit.current_streak, habit.longest_streak)
                .await?;
        }
        Ok(streaks)
    }

    fn duplicate(existing: HabitLog) -> LogCreatedResponse {
        LogCreatedResponse {
            message: LogCreatedResponse::DUPLICATE,
            log: HabitLogResponse::from(existing),
            streaks: None,
            already_completed: true,
        }
    }
}
