//! Row ↔ entity conversions
//!
//! Enum columns are stored as text, so loading a row can fail; the
//! conversions are `TryFrom` and surface a `DatabaseError` on bad data.

mod habit;
mod habit_log;
mod user;

pub use habit::{parse_weekdays, weekday_names, HabitColumns};
