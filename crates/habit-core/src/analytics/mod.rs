//! Analytics over completion logs
//!
//! Pure functions: callers load the dates, these modules do the arithmetic.

mod progress;
mod streak;

pub use progress::{
    month_name, percentage, Consistency, DailyProgress, DateRange, MonthDayProgress,
    MonthlyInsights, MonthlyReport, WeekChunk, WeeklyInsights, WeeklyReport, NO_HABITS_MESSAGE,
};
pub use streak::{calculate_streaks, StreakSummary};
