//! Consecutive-day logging streaks.

use chrono::NaiveDate;
use tracing::debug;

use fintrack_domain::{Dated, StreakResult};

use crate::time::Clock;

/// Largest gap, in days, between `today` and the newest record for the
/// current streak to stay alive.
pub const STREAK_GRACE_DAYS: i64 = 1;

/// Computes current and longest logging streaks from dated records.
pub struct StreakService;

impl StreakService {
    /// Computes the streak summary relative to `today`.
    ///
    /// Records are collapsed to distinct calendar days first, so several
    /// expenses entered on one day count once. The current streak is the run
    /// of consecutive days starting at the newest record, provided that record
    /// falls on `today` or the day before; otherwise it is zero.
    pub fn compute<R: Dated>(records: &[R], today: NaiveDate) -> StreakResult {
        let days = distinct_days_descending(records);
        let Some(&last) = days.first() else {
            return StreakResult::empty();
        };

        let runs = run_lengths(&days);
        let anchored = (today - last).num_days() <= STREAK_GRACE_DAYS;
        let current_streak = match runs.first() {
            Some(&newest) if anchored => newest,
            _ => 0,
        };
        let longest_streak = runs.iter().copied().max().unwrap_or(0);

        debug!(
            distinct_days = days.len(),
            current_streak, longest_streak, %last, "computed logging streak"
        );

        StreakResult {
            current_streak,
            longest_streak,
            last_expense_date: Some(last),
        }
    }

    /// Computes the streak summary using the clock's notion of today.
    pub fn compute_with_clock<R: Dated>(records: &[R], clock: &dyn Clock) -> StreakResult {
        Self::compute(records, clock.today())
    }
}

fn distinct_days_descending<R: Dated>(records: &[R]) -> Vec<NaiveDate> {
    let mut days: Vec<NaiveDate> = records.iter().map(Dated::date).collect();
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();
    days
}

/// Splits a descending list of distinct days into consecutive runs and
/// returns their lengths, newest run first.
fn run_lengths(days: &[NaiveDate]) -> Vec<u32> {
    let mut runs = Vec::new();
    let mut length = 0u32;
    let mut previous: Option<NaiveDate> = None;

    for &day in days {
        match previous {
            Some(prev) if (prev - day).num_days() == 1 => length += 1,
            Some(_) => {
                runs.push(length);
                length = 1;
            }
            None => length = 1,
        }
        previous = Some(day);
    }
    if length > 0 {
        runs.push(length);
    }
    runs
}
