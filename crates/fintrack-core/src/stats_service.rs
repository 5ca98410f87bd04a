//! Spending aggregates feeding badge evaluation and category views.

use fintrack_domain::{
    Amounted, Category, CategorySpending, ExpenseRecord, StatsSnapshot, StreakResult,
};

/// Folds expense records into aggregate statistics.
pub struct StatsService;

impl StatsService {
    /// Sum of all record amounts.
    pub fn total_spent<R: Amounted>(records: &[R]) -> f64 {
        records.iter().map(Amounted::amount).sum()
    }

    /// Builds the snapshot used for badge evaluation.
    ///
    /// `total_expenses` counts records, not distinct days.
    pub fn snapshot(
        records: &[ExpenseRecord],
        total_budget: f64,
        streak: &StreakResult,
    ) -> StatsSnapshot {
        StatsSnapshot {
            total_expenses: records.len(),
            spent: Self::total_spent(records),
            total_budget,
            current_streak: streak.current_streak,
        }
    }

    /// Pairs each category with the amount spent under its name.
    pub fn category_spending(
        categories: &[Category],
        records: &[ExpenseRecord],
    ) -> Vec<CategorySpending> {
        categories
            .iter()
            .map(|category| CategorySpending {
                name: category.name.clone(),
                limit: category.limit,
                spent: records
                    .iter()
                    .filter(|record| record.belongs_to(&category.name))
                    .map(Amounted::amount)
                    .sum(),
                color: category.color.clone(),
            })
            .collect()
    }
}
