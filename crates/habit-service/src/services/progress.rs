//! Progress service - weekly, monthly, and calendar views

use chrono::Datelike;
use habit_core::analytics::month_name;
use habit_core::{DateRange, MonthlyReport, Snowflake, WeeklyReport};
use tracing::instrument;
use validator::Validate;

use crate::dto::{CalendarQuery, CalendarResponse, HabitLogResponse, HabitResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct ProgressService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProgressService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Monday through Sunday of the current week
    #[instrument(skip(self))]
    pub async fn weekly(&self, user_id: Snowflake) -> ServiceResult<WeeklyReport> {
        let week = DateRange::current_week(self.ctx.today());
        let (total_habits, completed) = self.completions(user_id, week).await?;
        Ok(WeeklyReport::build(week, total_habits, &completed))
    }

    #[instrument(skip(self))]
    pub async fn monthly(&self, user_id: Snowflake) -> ServiceResult<MonthlyReport> {
        let month = DateRange::current_month(self.ctx.today());
        let (total_habits, completed) = self.completions(user_id, month).await?;
        Ok(MonthlyReport::build(month, total_habits, &completed))
    }

    /// All habits plus the completed logs of one month, for a calendar grid
    #[instrument(skip(self))]
    pub async fn calendar(
        &self,
        user_id: Snowflake,
        query: CalendarQuery,
    ) -> ServiceResult<CalendarResponse> {
        query.validate()?;

        let today = self.ctx.today();
        let year = query.year.unwrap_or_else(|| today.year());
        let month = query.month.unwrap_or_else(|| today.month());
        let range = DateRange::month(year, month)?;

        let habits = self.ctx.habit_repo().find_by_user(user_id).await?;
        let logs = self
            .ctx
            .log_repo()
            .find_completed_in_range(user_id, range.start, range.end)
            .await?;

        Ok(CalendarResponse {
            year,
            month,
            month_name: month_name(month),
            habits: habits.into_iter().map(HabitResponse::from).collect(),
            logs: logs.into_iter().map(HabitLogResponse::from).collect(),
        })
    }

    async fn completions(
        &self,
        user_id: Snowflake,
        range: DateRange,
    ) -> ServiceResult<(i64, Vec<chrono::NaiveDate>)> {
        let total_habits = self.ctx.habit_repo().count_by_user(user_id).await?;
        if total_habits == 0 {
            return Ok((0, Vec::new()));
        }

        let completed = self
            .ctx
            .log_repo()
            .find_completed_in_range(user_id, range.start, range.end)
            .await?
            .into_iter()
            .map(|log| log.date)
            .collect();
        Ok((total_habits, completed))
    }
}
