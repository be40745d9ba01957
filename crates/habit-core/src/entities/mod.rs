//! Domain entities - core business objects

mod habit;
mod habit_log;
mod user;

pub use habit::{Category, Frequency, Habit};
pub use habit_log::{parse_log_date, HabitLog};
pub use user::{normalize_email, Role, User};
