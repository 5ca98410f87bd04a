//! One-shot refresh of a profile's streak and badges.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use fintrack_domain::{
    BadgeBoard, EarnedBadges, ExpenseRecord, Profile, ProfileGamificationUpdate, StatsSnapshot,
    StreakResult,
};

use crate::{
    badge_service::BadgeService, stats_service::StatsService, streak_service::StreakService,
    time::Clock,
};

/// Fresh gamification state for a profile.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GamificationReport {
    pub streak: StreakResult,
    pub stats: StatsSnapshot,
    pub badges: EarnedBadges,
    pub board: BadgeBoard,
}

impl GamificationReport {
    /// Columns to write back onto the profile.
    pub fn profile_update(&self) -> ProfileGamificationUpdate {
        ProfileGamificationUpdate {
            badges: self.badges.clone(),
            current_streak: self.streak.current_streak,
            longest_streak: self.streak.longest_streak,
            last_expense_date: self.streak.last_expense_date,
        }
    }
}

/// Runs streak calculation, aggregation, and badge evaluation in sequence.
pub struct GamificationService;

impl GamificationService {
    pub fn refresh(
        profile: &Profile,
        records: &[ExpenseRecord],
        today: NaiveDate,
    ) -> GamificationReport {
        let streak = StreakService::compute(records, today);
        let stats = StatsService::snapshot(records, profile.total_budget, &streak);
        let badges = BadgeService::evaluate(&stats);
        let board = BadgeService::board(&stats);

        info!(
            profile = %profile.id,
            current_streak = streak.current_streak,
            longest_streak = streak.longest_streak,
            badges = badges.len(),
            "refreshed gamification state"
        );

        GamificationReport {
            streak,
            stats,
            badges,
            board,
        }
    }

    pub fn refresh_with_clock(
        profile: &Profile,
        records: &[ExpenseRecord],
        clock: &dyn Clock,
    ) -> GamificationReport {
        Self::refresh(profile, records, clock.today())
    }
}
