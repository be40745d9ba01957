//! Habit service - CRUD over a user's own habits

use chrono::{NaiveTime, Utc};
use habit_core::entities::{parse_log_date, Habit};
use habit_core::{DomainError, Snowflake};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateHabitRequest, HabitResponse, MessageResponse, UpdateHabitRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// `HH:MM`, 24-hour. An empty string means no reminder time.
fn parse_reminder_time(raw: &str) -> Result<Option<NaiveTime>, DomainError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map(Some)
        .map_err(|_| DomainError::ValidationError(format!("Invalid reminder time: {raw}")))
}

pub struct HabitService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HabitService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        user_id: Snowflake,
        request: CreateHabitRequest,
    ) -> ServiceResult<HabitResponse> {
        request.validate()?;

        let start_date = match request.start_date.as_deref() {
            Some(raw) => parse_log_date(raw)?,
            None => self.ctx.today(),
        };

        let mut habit = Habit::new(
            self.ctx.generate_id(),
            user_id,
            &request.name,
            request.category,
            request.frequency,
            start_date,
        );
        habit.description = request.description.unwrap_or_default();
        habit.custom_days = request.custom_days;
        habit.reminder_enabled = request.reminder_enabled;
        habit.reminder_time = match request.reminder_time.as_deref() {
            Some(raw) => parse_reminder_time(raw)?,
            None => None,
        };
        habit.reminder_days = request.reminder_days;

        self.ctx.habit_repo().create(&habit).await?;

        info!(habit_id = %habit.id, user_id = %user_id, "Habit created");
        Ok(HabitResponse::from(habit))
    }

    /// The user's habits, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: Snowflake) -> ServiceResult<Vec<HabitResponse>> {
        let habits = self.ctx.habit_repo().find_by_user(user_id).await?;
        Ok(habits.into_iter().map(HabitResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, user_id: Snowflake, habit_id: Snowflake) -> ServiceResult<HabitResponse> {
        let habit = self.find_owned(user_id, habit_id).await?;
        Ok(HabitResponse::from(habit))
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        user_id: Snowflake,
        habit_id: Snowflake,
        request: UpdateHabitRequest,
    ) -> ServiceResult<HabitResponse> {
        request.validate()?;

        let mut habit = self.find_owned(user_id, habit_id).await?;

        if let Some(name) = request.name {
            habit.name = name.trim().to_string();
        }
        if let Some(category) = request.category {
            habit.category = category;
        }
        if let Some(frequency) = request.frequency {
            habit.frequency = frequency;
        }
        if let Some(description) = request.description {
            habit.description = description;
        }
        if let Some(custom_days) = request.custom_days {
            habit.custom_days = custom_days;
        }
        if let Some(raw) = request.start_date.as_deref() {
            habit.start_date = parse_log_date(raw)?;
        }
        if let Some(enabled) = request.reminder_enabled {
            habit.reminder_enabled = enabled;
        }
        if let Some(raw) = request.reminder_time.as_deref() {
            habit.reminder_time = parse_reminder_time(raw)?;
        }
        if let Some(reminder_days) = request.reminder_days {
            habit.reminder_days = reminder_days;
        }
        habit.updated_at = Utc::now();

        self.ctx.habit_repo().update(&habit).await?;

        info!(habit_id = %habit.id, "Habit updated");
        Ok(HabitResponse::from(habit))
    }

    /// Delete a habit; its logs go with it
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        user_id: Snowflake,
        habit_id: Snowflake,
    ) -> ServiceResult<MessageResponse> {
        self.find_owned(user_id, habit_id).await?;
        self.ctx.habit_repo().delete(habit_id).await?;

        info!(habit_id = %habit_id, "Habit deleted");
        Ok(MessageResponse::new("Habit deleted successfully"))
    }

    /// Load a habit, failing with 404 if missing and 403 if someone else's
    pub(crate) async fn find_owned(
        &self,
        user_id: Snowflake,
        habit_id: Snowflake,
    ) -> ServiceResult<Habit> {
        let habit = self
            .ctx
            .habit_repo()
            .find_by_id(habit_id)
            .await?
            .ok_or(DomainError::HabitNotFound(habit_id))?;
        habit.ensure_owner(user_id)?;
        Ok(habit)
    }
}
