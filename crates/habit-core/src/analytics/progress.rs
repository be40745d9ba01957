//! Weekly and monthly progress aggregation

use std::collections::HashMap;

use chrono::{Datelike, Days, Month, NaiveDate};
use serde::{Serialize, Serializer};

use crate::error::DomainError;

pub const NO_HABITS_MESSAGE: &str = "No habits created yet";

const DAYS_PER_WEEK: usize = 7;

/// `round(numerator / denominator * 100)` with halves rounded up.
/// A zero denominator yields 0.
pub fn percentage(numerator: i64, denominator: i64) -> i64 {
    if denominator <= 0 || numerator <= 0 {
        return 0;
    }
    (numerator * 200 + denominator) / (denominator * 2)
}

/// English month name for 1..=12
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("", |m| m.name())
}

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Monday through Sunday of the week containing `today`
    pub fn current_week(today: NaiveDate) -> Self {
        let start = today - Days::new(u64::from(today.weekday().num_days_from_monday()));
        Self {
            start,
            end: start + Days::new(6),
        }
    }

    pub fn current_month(today: NaiveDate) -> Self {
        let start = today.with_day(1).unwrap_or(today);
        Self {
            start,
            end: last_day_of_month(start),
        }
    }

    /// The given calendar month
    pub fn month(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(1970..=9999).contains(&year) {
            return Err(DomainError::ValidationError(format!(
                "year must be between 1970 and 9999, got {year}"
            )));
        }
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            DomainError::ValidationError(format!("month must be between 1 and 12, got {month}"))
        })?;
        Ok(Self {
            start,
            end: last_day_of_month(start),
        })
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    fn tally(&self, completed: &[NaiveDate]) -> HashMap<NaiveDate, i64> {
        let mut counts = HashMap::new();
        for day in completed.iter().filter(|d| self.contains(**d)) {
            *counts.entry(*day).or_insert(0) += 1;
        }
        counts
    }
}

fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}

/// Consistency label shown alongside a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consistency {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl Consistency {
    /// Weekly rating from the number of active days
    pub fn from_active_days(days_active: i64) -> Self {
        match days_active {
            d if d >= 5 => Self::Excellent,
            d if d >= 3 => Self::Good,
            _ => Self::NeedsImprovement,
        }
    }

    /// Monthly rating from the overall completion percentage
    pub fn from_percentage(pct: i64) -> Self {
        match pct {
            p if p >= 80 => Self::Excellent,
            p if p >= 60 => Self::Good,
            p if p >= 40 => Self::Fair,
            _ => Self::NeedsImprovement,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl Serialize for Consistency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ============================================================================
// Weekly
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyProgress {
    /// Short weekday name, `Mon`..`Sun`
    pub day: String,
    pub date: NaiveDate,
    pub completions: i64,
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyInsights {
    pub best_day: DailyProgress,
    pub consistency: Consistency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub total_habits: i64,
    pub days_active: i64,
    pub total_completions: i64,
    pub completion_percentage: i64,
    pub daily_data: Vec<DailyProgress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<WeeklyInsights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl WeeklyReport {
    /// Aggregate `completed` (one entry per completed log) over `week`.
    /// Dates outside the range are ignored.
    pub fn build(week: DateRange, total_habits: i64, completed: &[NaiveDate]) -> Self {
        if total_habits <= 0 {
            return Self {
                week_start: week.start,
                week_end: week.end,
                total_habits: 0,
                days_active: 0,
                total_completions: 0,
                completion_percentage: 0,
                daily_data: Vec::new(),
                insights: None,
                message: Some(NO_HABITS_MESSAGE),
            };
        }

        let counts = week.tally(completed);
        let daily_data: Vec<DailyProgress> = week
            .days()
            .map(|date| {
                let completions = counts.get(&date).copied().unwrap_or(0);
                DailyProgress {
                    day: date.weekday().to_string(),
                    date,
                    completions,
                    percentage: percentage(completions, total_habits),
                }
            })
            .collect();

        let days_active = daily_data.iter().filter(|d| d.completions > 0).count() as i64;
        let total_completions: i64 = counts.values().sum();

        // First maximum wins, so ties go to the earlier day.
        let best_day = daily_data
            .iter()
            .fold(None::<&DailyProgress>, |best, day| match best {
                Some(b) if day.completions <= b.completions => Some(b),
                _ => Some(day),
            })
            .cloned();

        Self {
            week_start: week.start,
            week_end: week.end,
            total_habits,
            days_active,
            total_completions,
            completion_percentage: percentage(total_completions, total_habits * week.num_days()),
            insights: best_day.map(|best_day| WeeklyInsights {
                best_day,
                consistency: Consistency::from_active_days(days_active),
            }),
            daily_data,
            message: None,
        }
    }
}

// ============================================================================
// Monthly
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthDayProgress {
    pub date: NaiveDate,
    /// Day of month, starting at 1
    pub day: u32,
    pub completions: i64,
    pub percentage: i64,
}

/// Consecutive 7-day slice of a month; the last one may be shorter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekChunk {
    pub week: usize,
    pub completions: i64,
    pub percentage: i64,
    pub days: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyInsights {
    pub best_week: String,
    pub best_week_percentage: i64,
    pub consistency: Consistency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub month_start: NaiveDate,
    pub month_end: NaiveDate,
    pub month_name: &'static str,
    pub total_habits: i64,
    pub days_active: i64,
    pub total_completions: i64,
    pub completion_percentage: i64,
    pub daily_data: Vec<MonthDayProgress>,
    pub weekly_data: Vec<WeekChunk>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<MonthlyInsights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl MonthlyReport {
    pub fn build(month: DateRange, total_habits: i64, completed: &[NaiveDate]) -> Self {
        let month_name = month_name(month.start.month());

        if total_habits <= 0 {
            return Self {
                month_start: month.start,
                month_end: month.end,
                month_name,
                total_habits: 0,
                days_active: 0,
                total_completions: 0,
                completion_percentage: 0,
                daily_data: Vec::new(),
                weekly_data: Vec::new(),
                insights: None,
                message: Some(NO_HABITS_MESSAGE),
            };
        }

        let counts = month.tally(completed);
        let daily_data: Vec<MonthDayProgress> = month
            .days()
            .map(|date| {
                let completions = counts.get(&date).copied().unwrap_or(0);
                MonthDayProgress {
                    date,
                    day: date.day(),
                    completions,
                    percentage: percentage(completions, total_habits),
                }
            })
            .collect();

        let weekly_data: Vec<WeekChunk> = daily_data
            .chunks(DAYS_PER_WEEK)
            .enumerate()
            .map(|(i, chunk)| {
                let completions = chunk.iter().map(|d| d.completions).sum();
                WeekChunk {
                    week: i + 1,
                    completions,
                    percentage: percentage(completions, total_habits * chunk.len() as i64),
                    days: chunk.len(),
                }
            })
            .collect();

        let days_active = daily_data.iter().filter(|d| d.completions > 0).count() as i64;
        let total_completions: i64 = counts.values().sum();
        let completion_percentage =
            percentage(total_completions, total_habits * month.num_days());

        let best_week = weekly_data.iter().fold(None::<&WeekChunk>, |best, week| match best {
            Some(b) if week.percentage <= b.percentage => Some(b),
            _ => Some(week),
        });

        Self {
            month_start: month.start,
            month_end: month.end,
            month_name,
            total_habits,
            days_active,
            total_completions,
            completion_percentage,
            insights: Some(MonthlyInsights {
                best_week: best_week.map_or_else(|| "N/A".to_string(), |w| format!("Week {}", w.week)),
                best_week_percentage: best_week.map_or(0, |w| w.percentage),
                consistency: Consistency::from_percentage(completion_percentage),
            }),
            daily_data,
            weekly_data,
            message: None,
        }
    }
}
