//! Assembles the dashboard report from a loosely typed input document.

use std::{fs, path::Path};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use fintrack_config::{DayBoundary, IngestMode};
use fintrack_core::{
    ingest_lenient, ingest_strict, validate_budget, Clock, GamificationService, IngestIssue,
    LocalClock, RawExpense, StatsService, UtcClock,
};
use fintrack_domain::{
    BadgeBoard, Category, CategorySpending, Profile, ProfileGamificationUpdate, StatsSnapshot,
    StreakResult,
};

use crate::errors::Result;

/// Input document: a profile, its categories, and its raw expense records.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotInput {
    pub profile: Profile,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub expenses: Vec<RawExpense>,
}

impl SnapshotInput {
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }
}

/// Everything a frontend needs to render and persist gamification state.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub profile_id: Uuid,
    pub evaluated_on: NaiveDate,
    pub profile_update: ProfileGamificationUpdate,
    pub streak: StreakResult,
    pub stats: StatsSnapshot,
    pub budget_usage_percent: Option<f64>,
    pub savings_progress_percent: Option<f64>,
    pub board: BadgeBoard,
    pub categories: Vec<CategorySpending>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped_records: Vec<IngestIssue>,
}

/// Returns the clock matching the configured day boundary.
pub fn clock_for(boundary: DayBoundary) -> Box<dyn Clock> {
    match boundary {
        DayBoundary::Local => Box::new(LocalClock),
        DayBoundary::Utc => Box::new(UtcClock),
    }
}

/// Validates the raw records and runs the gamification refresh for `today`.
pub fn build_report(
    input: SnapshotInput,
    mode: IngestMode,
    today: NaiveDate,
) -> Result<DashboardReport> {
    let SnapshotInput {
        profile,
        categories,
        expenses,
    } = input;

    validate_budget(profile.total_budget)?;

    let raw_count = expenses.len();
    let (records, skipped_records) = match mode {
        IngestMode::Strict => (ingest_strict(expenses)?, Vec::new()),
        IngestMode::Lenient => {
            let outcome = ingest_lenient(expenses);
            (outcome.records, outcome.issues)
        }
    };
    debug!(
        raw = raw_count,
        accepted = records.len(),
        %mode,
        "ingested expense records"
    );

    let refreshed = GamificationService::refresh(&profile, &records, today);
    let categories = StatsService::category_spending(&categories, &records);

    if !skipped_records.is_empty() {
        info!(
            skipped = skipped_records.len(),
            "report built with skipped records"
        );
    }

    Ok(DashboardReport {
        profile_id: profile.id,
        evaluated_on: today,
        profile_update: refreshed.profile_update(),
        streak: refreshed.streak,
        stats: refreshed.stats,
        budget_usage_percent: refreshed.stats.budget_usage_percent(),
        savings_progress_percent: profile.savings_progress_percent(),
        board: refreshed.board,
        categories,
        skipped_records,
    })
}
