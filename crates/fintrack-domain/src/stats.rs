//! Aggregate statistics consumed by badge evaluation.

use serde::{Deserialize, Serialize};

/// Spending and streak aggregates for a single user.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct StatsSnapshot {
    pub total_expenses: usize,
    pub spent: f64,
    pub total_budget: f64,
    pub current_streak: u32,
}

impl StatsSnapshot {
    /// Percentage of the budget already spent.
    ///
    /// Returns `None` when the budget is zero, negative, or not finite, since
    /// no meaningful ratio exists.
    pub fn budget_usage_percent(&self) -> Option<f64> {
        if !self.total_budget.is_finite() || self.total_budget <= 0.0 {
            return None;
        }
        Some(self.spent / self.total_budget * 100.0)
    }

    pub fn is_under_budget(&self) -> bool {
        self.spent < self.total_budget
    }
}
