//! Entity to DTO mappers

use habit_core::entities::{Habit, HabitLog, User};

use super::responses::{HabitLogResponse, HabitResponse, StatsResponse, UserResponse};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            xp: user.xp,
            level: user.level,
            xp_to_next_level: user.xp_to_next_level(),
            badges: user.badges.clone(),
            daily_spin_available: user.daily_spin_available,
            last_spin_date: user.last_spin_date,
            created_at: user.created_at,
        }
    }
}

impl From<&User> for StatsResponse {
    fn from(user: &User) -> Self {
        Self {
            xp: user.xp,
            level: user.level,
            xp_to_next_level: user.xp_to_next_level(),
            badges: user.badges.clone(),
            daily_spin_available: user.daily_spin_available,
            last_spin_date: user.last_spin_date,
        }
    }
}

impl From<&Habit> for HabitResponse {
    fn from(habit: &Habit) -> Self {
        Self {
            id: habit.id,
            user_id: habit.user_id,
            name: habit.name.clone(),
            category: habit.category,
            description: habit.description.clone(),
            frequency: habit.frequency,
            custom_days: habit.custom_days.clone(),
            start_date: habit.start_date,
            current_streak: habit.current_streak,
            longest_streak: habit.longest_streak,
            reminder_enabled: habit.reminder_enabled,
            reminder_time: habit.reminder_time.map(|t| t.format("%H:%M").to_string()),
            reminder_days: habit.reminder_days.clone(),
            created_at: habit.created_at,
            updated_at: habit.updated_at,
        }
    }
}

impl From<Habit> for HabitResponse {
    fn from(habit: Habit) -> Self {
        Self::from(&habit)
    }
}

impl From<&HabitLog> for HabitLogResponse {
    fn from(log: &HabitLog) -> Self {
        Self {
            id: log.id,
            habit_id: log.habit_id,
            user_id: log.user_id,
            date: log.date,
            completed: log.completed,
            created_at: log.created_at,
        }
    }
}

impl From<HabitLog> for HabitLogResponse {
    fn from(log: HabitLog) -> Self {
        Self::from(&log)
    }
}
