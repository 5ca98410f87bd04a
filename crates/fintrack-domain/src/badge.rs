//! Badge identifiers and the ordered list of earned badges.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifiers for every achievement in the catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BadgeId {
    FirstStep,
    TrackerPro,
    BudgetMaster,
    Saver,
    StreakKing,
    StreakLegend,
}

impl BadgeId {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeId::FirstStep => "first_step",
            BadgeId::TrackerPro => "tracker_pro",
            BadgeId::BudgetMaster => "budget_master",
            BadgeId::Saver => "saver",
            BadgeId::StreakKing => "streak_king",
            BadgeId::StreakLegend => "streak_legend",
        }
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display names of earned badges, in catalog order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct EarnedBadges(Vec<String>);

impl EarnedBadges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.0.push(name.into());
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|earned| earned == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a EarnedBadges {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<String> for EarnedBadges {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Earned state of one catalog entry, as shown on the achievements board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BadgeStatus {
    pub id: BadgeId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub earned: bool,
}

/// Every catalog entry with its earned flag, in catalog order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BadgeBoard {
    pub entries: Vec<BadgeStatus>,
}

impl BadgeBoard {
    pub fn earned_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.earned).count()
    }

    /// Slots still locked on the board.
    pub fn locked_count(&self) -> usize {
        self.entries.len() - self.earned_count()
    }

    pub fn earned(&self) -> impl Iterator<Item = &BadgeStatus> {
        self.entries.iter().filter(|entry| entry.earned)
    }
}
