//! Database models - SQLx-compatible structs for PostgreSQL tables

mod habit;
mod habit_log;
mod user;

pub use habit::HabitModel;
pub use habit_log::HabitLogModel;
pub use user::UserModel;
