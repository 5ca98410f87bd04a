//! Logging streak summary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Consecutive-day logging statistics for a record history.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreakResult {
    /// Days in the run ending today or yesterday; zero when that run is broken.
    pub current_streak: u32,
    /// Longest run anywhere in the history. Never below `current_streak`.
    pub longest_streak: u32,
    pub last_expense_date: Option<NaiveDate>,
}

impl StreakResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.current_streak > 0
    }
}
