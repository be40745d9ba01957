//! Streak calculation

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    pub current_streak: i32,
    pub longest_streak: i32,
}

/// Compute current and longest streaks from the completed dates of one habit.
///
/// The current streak walks the distinct dates newest first, matching each
/// against a cursor that starts at `today` and steps back one day per match.
/// The first mismatch ends it, so a completion dated after `today` makes the
/// current streak zero. The longest streak is the longest run of consecutive
/// calendar days anywhere in history. Duplicate dates count once.
///
/// Every frequency is measured in consecutive calendar days, so a `Weekly`
/// habit logged once a week never gets past a streak of one.
pub fn calculate_streaks<I>(completed: I, today: NaiveDate) -> StreakSummary
where
    I: IntoIterator<Item = NaiveDate>,
{
    let dates: BTreeSet<NaiveDate> = completed.into_iter().collect();
    if dates.is_empty() {
        return StreakSummary::default();
    }

    let mut current = 0;
    let mut cursor = Some(today);
    for &day in dates.iter().rev() {
        if cursor != Some(day) {
            break;
        }
        current += 1;
        cursor = day.pred_opt();
    }

    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;
    for &day in &dates {
        run = match prev {
            Some(p) if p.succ_opt() == Some(day) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }

    StreakSummary {
        current_streak: current,
        longest_streak: longest,
    }
}
