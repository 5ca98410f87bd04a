//! Achievement catalog and badge evaluation.
//!
//! The catalog is a fixed, ordered table. Evaluation walks it front to back,
//! so earned badges always come out in declaration order.

use std::fmt;

use tracing::debug;

use fintrack_domain::{BadgeBoard, BadgeId, BadgeStatus, EarnedBadges, StatsSnapshot};

/// Expenses required before budget-based badges can unlock.
pub const BUDGET_BADGE_MIN_EXPENSES: usize = 5;
/// Budget usage, in percent, that the saver badge must stay below.
pub const SAVER_USAGE_CEILING_PERCENT: f64 = 80.0;
pub const TRACKER_PRO_MIN_EXPENSES: usize = 30;
pub const STREAK_KING_MIN_DAYS: u32 = 7;
pub const STREAK_LEGEND_MIN_DAYS: u32 = 30;

/// Immutable catalog entry pairing a badge with its unlock criterion.
#[derive(Clone, Copy)]
pub struct BadgeDefinition {
    pub id: BadgeId,
    /// Label shown to the user, icon glyph included.
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub criteria: fn(&StatsSnapshot) -> bool,
}

impl BadgeDefinition {
    pub fn is_earned(&self, stats: &StatsSnapshot) -> bool {
        (self.criteria)(stats)
    }

    fn status(&self, stats: &StatsSnapshot) -> BadgeStatus {
        BadgeStatus {
            id: self.id,
            name: self.name.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            earned: self.is_earned(stats),
        }
    }
}

impl fmt::Debug for BadgeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BadgeDefinition")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

pub static BADGE_CATALOG: [BadgeDefinition; 6] = [
    BadgeDefinition {
        id: BadgeId::FirstStep,
        name: "🎯 First Step",
        description: "Added your first expense",
        icon: "🎯",
        criteria: first_step,
    },
    BadgeDefinition {
        id: BadgeId::TrackerPro,
        name: "📊 Tracker Pro",
        description: "Logged 30+ expenses",
        icon: "📊",
        criteria: tracker_pro,
    },
    BadgeDefinition {
        id: BadgeId::BudgetMaster,
        name: "💰 Budget Master",
        description: "Stayed under budget",
        icon: "💰",
        criteria: budget_master,
    },
    BadgeDefinition {
        id: BadgeId::Saver,
        name: "💎 Saver",
        description: "Used less than 80% of budget",
        icon: "💎",
        criteria: saver,
    },
    BadgeDefinition {
        id: BadgeId::StreakKing,
        name: "🔥 Streak King",
        description: "7-day tracking streak",
        icon: "🔥",
        criteria: streak_king,
    },
    BadgeDefinition {
        id: BadgeId::StreakLegend,
        name: "⚡ Streak Legend",
        description: "30-day tracking streak",
        icon: "⚡",
        criteria: streak_legend,
    },
];

fn first_step(stats: &StatsSnapshot) -> bool {
    stats.total_expenses >= 1
}

fn tracker_pro(stats: &StatsSnapshot) -> bool {
    stats.total_expenses >= TRACKER_PRO_MIN_EXPENSES
}

fn budget_master(stats: &StatsSnapshot) -> bool {
    stats.is_under_budget() && stats.total_expenses >= BUDGET_BADGE_MIN_EXPENSES
}

// A zero or negative budget has no usage ratio, so the badge stays locked.
fn saver(stats: &StatsSnapshot) -> bool {
    let frugal = matches!(
        stats.budget_usage_percent(),
        Some(percent) if percent < SAVER_USAGE_CEILING_PERCENT
    );
    frugal && stats.total_expenses >= BUDGET_BADGE_MIN_EXPENSES
}

fn streak_king(stats: &StatsSnapshot) -> bool {
    stats.current_streak >= STREAK_KING_MIN_DAYS
}

fn streak_legend(stats: &StatsSnapshot) -> bool {
    stats.current_streak >= STREAK_LEGEND_MIN_DAYS
}

/// Evaluates aggregate statistics against the badge catalog.
pub struct BadgeService;

impl BadgeService {
    /// Returns the full catalog in declaration order.
    pub fn catalog() -> &'static [BadgeDefinition] {
        &BADGE_CATALOG
    }

    pub fn definition(id: BadgeId) -> Option<&'static BadgeDefinition> {
        BADGE_CATALOG.iter().find(|badge| badge.id == id)
    }

    /// Display names of every badge whose criterion holds, in catalog order.
    pub fn evaluate(stats: &StatsSnapshot) -> EarnedBadges {
        let earned: EarnedBadges = BADGE_CATALOG
            .iter()
            .filter(|badge| badge.is_earned(stats))
            .map(|badge| badge.name.to_string())
            .collect();
        debug!(earned = earned.len(), "evaluated badges");
        earned
    }

    /// Identifiers of every earned badge, in catalog order.
    pub fn earned_ids(stats: &StatsSnapshot) -> Vec<BadgeId> {
        BADGE_CATALOG
            .iter()
            .filter(|badge| badge.is_earned(stats))
            .map(|badge| badge.id)
            .collect()
    }

    /// Builds the achievements board: every catalog entry with its earned flag.
    pub fn board(stats: &StatsSnapshot) -> BadgeBoard {
        BadgeBoard {
            entries: BADGE_CATALOG
                .iter()
                .map(|badge| badge.status(stats))
                .collect(),
        }
    }
}
