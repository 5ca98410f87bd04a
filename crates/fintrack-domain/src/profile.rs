//! User profile, spending categories, and the gamification fields persisted
//! back onto the profile.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::*, EarnedBadges};

/// Budgeting profile owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub monthly_income: f64,
    #[serde(default)]
    pub total_budget: f64,
    #[serde(default)]
    pub savings_goal: f64,
    #[serde(default)]
    pub current_savings: f64,
}

impl Profile {
    pub fn new(email: impl Into<String>, total_budget: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            full_name: None,
            monthly_income: 0.0,
            total_budget,
            savings_goal: 0.0,
            current_savings: 0.0,
        }
    }
}

impl Profile {
    /// Share of the savings goal already saved, in percent.
    ///
    /// Returns `None` when the goal is zero, negative, or not finite.
    pub fn savings_progress_percent(&self) -> Option<f64> {
        if !self.savings_goal.is_finite() || self.savings_goal <= 0.0 {
            return None;
        }
        Some(self.current_savings / self.savings_goal * 100.0)
    }
}

impl Identifiable for Profile {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// A named spending bucket with an optional limit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub limit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, limit: f64) -> Self {
        Self {
            name: name.into(),
            limit,
            color: None,
        }
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Category paired with the amount spent against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySpending {
    pub name: String,
    pub limit: f64,
    pub spent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CategorySpending {
    pub fn remaining(&self) -> f64 {
        self.limit - self.spent
    }

    pub fn is_over_limit(&self) -> bool {
        self.spent > self.limit
    }
}

/// Gamification columns written back onto the profile after a refresh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileGamificationUpdate {
    pub badges: EarnedBadges,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_expense_date: Option<NaiveDate>,
}
