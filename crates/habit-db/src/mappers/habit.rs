//! Habit entity ↔ model mapper

use chrono::Weekday;
use habit_core::entities::{Category, Frequency, Habit};
use habit_core::error::DomainError;
use habit_core::value_objects::Snowflake;

use crate::models::HabitModel;

/// `Mon`..`Sun`, the column representation of a weekday list
pub fn weekday_names(days: &[Weekday]) -> Vec<String> {
    days.iter().map(ToString::to_string).collect()
}

pub fn parse_weekdays(raw: &[String]) -> Result<Vec<Weekday>, DomainError> {
    raw.iter()
        .map(|d| {
            d.parse::<Weekday>()
                .map_err(|_| DomainError::DatabaseError(format!("bad weekday column: {d}")))
        })
        .collect()
}

fn bad_column(column: &str, value: &str) -> DomainError {
    DomainError::DatabaseError(format!("bad {column} column: {value}"))
}

impl TryFrom<HabitModel> for Habit {
    type Error = DomainError;

    fn try_from(model: HabitModel) -> Result<Self, Self::Error> {
        let category: Category = model
            .category
            .parse()
            .map_err(|_| bad_column("category", &model.category))?;
        let frequency: Frequency = model
            .frequency
            .parse()
            .map_err(|_| bad_column("frequency", &model.frequency))?;

        Ok(Habit {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            name: model.name,
            category,
            description: model.description,
            frequency,
            custom_days: parse_weekdays(&model.custom_days)?,
            start_date: model.start_date,
            current_streak: model.current_streak,
            longest_streak: model.longest_streak,
            reminder_enabled: model.reminder_enabled,
            reminder_time: model.reminder_time,
            reminder_days: parse_weekdays(&model.reminder_days)?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Column values for an insert or update
pub struct HabitColumns<'a> {
    pub id: i64,
    pub user_id: i64,
    pub name: &'a str,
    pub category: &'static str,
    pub description: &'a str,
    pub frequency: &'static str,
    pub custom_days: Vec<String>,
    pub reminder_days: Vec<String>,
}

impl<'a> HabitColumns<'a> {
    pub fn new(habit: &'a Habit) -> Self {
        Self {
            id: habit.id.into_inner(),
            user_id: habit.user_id.into_inner(),
            name: &habit.name,
            category: habit.category.as_str(),
            description: &habit.description,
            frequency: habit.frequency.as_str(),
            custom_days: weekday_names(&habit.custom_days),
            reminder_days: weekday_names(&habit.reminder_days),
        }
    }
}
