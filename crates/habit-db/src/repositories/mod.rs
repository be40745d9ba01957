//! PostgreSQL implementations of the repository traits in habit-core

mod error;
mod habit;
mod habit_log;
mod user;

pub use habit::PgHabitRepository;
pub use habit_log::PgHabitLogRepository;
pub use user::PgUserRepository;
