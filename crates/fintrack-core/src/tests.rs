use chrono::{Duration, NaiveDate};

use crate::{
    badge_service::{BadgeService, BADGE_CATALOG},
    gamification_service::GamificationService,
    ingest::{
        ingest_lenient, ingest_strict, parse_amount, parse_record_date, validate_budget, RawAmount,
        RawExpense,
    },
    stats_service::StatsService,
    streak_service::StreakService,
    time::FixedClock,
    CoreError,
};
use fintrack_domain::{
    BadgeId, Category, ExpenseRecord, Profile, StatsSnapshot, StreakResult,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn days_ago(days: i64) -> NaiveDate {
    today() - Duration::days(days)
}

fn records_on(offsets: &[i64]) -> Vec<ExpenseRecord> {
    offsets
        .iter()
        .map(|&offset| ExpenseRecord::new(days_ago(offset), 10.0))
        .collect()
}

fn stats(total_expenses: usize, spent: f64, total_budget: f64, current_streak: u32) -> StatsSnapshot {
    StatsSnapshot {
        total_expenses,
        spent,
        total_budget,
        current_streak,
    }
}

#[test]
fn streak_of_no_records_is_empty() {
    let result = StreakService::compute::<ExpenseRecord>(&[], today());

    assert_eq!(result, StreakResult::empty());
    assert_eq!(result.last_expense_date, None);
}

#[test]
fn single_record_today_starts_a_streak() {
    let result = StreakService::compute(&records_on(&[0]), today());

    assert_eq!(result.current_streak, 1);
    assert_eq!(result.longest_streak, 1);
    assert_eq!(result.last_expense_date, Some(today()));
}

#[test]
fn same_day_records_collapse_into_one_day() {
    let result = StreakService::compute(&records_on(&[0, 0, 1, 1, 1, 2]), today());

    assert_eq!(result.current_streak, 3);
    assert_eq!(result.longest_streak, 3);
}

#[test]
fn gap_after_today_keeps_current_streak_at_one() {
    let result = StreakService::compute(&records_on(&[0, 5, 6]), today());

    assert_eq!(result.current_streak, 1);
    assert_eq!(result.longest_streak, 2);
}

#[test]
fn streak_ending_yesterday_is_still_current() {
    let result = StreakService::compute(&records_on(&[1, 2]), today());

    assert_eq!(result.current_streak, 2);
    assert_eq!(result.longest_streak, 2);
    assert_eq!(result.last_expense_date, Some(days_ago(1)));
}

#[test]
fn stale_history_has_no_current_streak() {
    let result = StreakService::compute(&records_on(&[3, 4, 5, 10]), today());

    assert_eq!(result.current_streak, 0);
    assert_eq!(result.longest_streak, 3);
    assert_eq!(result.last_expense_date, Some(days_ago(3)));
}

#[test]
fn longest_streak_can_lie_in_the_past() {
    let result = StreakService::compute(&records_on(&[0, 1, 10, 11, 12, 13, 14]), today());

    assert_eq!(result.current_streak, 2);
    assert_eq!(result.longest_streak, 5);
}

#[test]
fn input_order_does_not_matter() {
    let result = StreakService::compute(&records_on(&[2, 0, 6, 1, 5]), today());

    assert_eq!(result.current_streak, 3);
    assert_eq!(result.longest_streak, 3);
    assert_eq!(result.last_expense_date, Some(today()));
}

#[test]
fn future_dated_record_anchors_current_streak() {
    let tomorrow = today() + Duration::days(1);
    let records = vec![
        ExpenseRecord::new(tomorrow, 5.0),
        ExpenseRecord::new(today(), 5.0),
    ];
    let result = StreakService::compute(&records, today());

    assert_eq!(result.current_streak, 2);
    assert_eq!(result.longest_streak, 2);
    assert_eq!(result.last_expense_date, Some(tomorrow));
}

#[test]
fn streak_walk_accepts_plain_dates() {
    let dates = vec![today(), days_ago(1)];
    let result = StreakService::compute(&dates, today());

    assert_eq!(result.current_streak, 2);
}

#[test]
fn longest_never_falls_below_current_across_histories() {
    // Each bit of the mask is a logged day, bit 0 being today.
    for mask in 0u32..1024 {
        let offsets: Vec<i64> = (0..10).filter(|bit| mask & (1 << bit) != 0).collect();
        let result = StreakService::compute(&records_on(&offsets), today());

        assert!(
            result.longest_streak >= result.current_streak,
            "mask {mask:#b}: {result:?}"
        );
        let recent = mask & 0b11 != 0;
        assert_eq!(result.current_streak > 0, recent, "mask {mask:#b}: {result:?}");
        if mask == 0 {
            assert_eq!(result.longest_streak, 0);
        } else {
            assert!(result.longest_streak >= 1);
        }
    }
}

#[test]
fn clock_supplies_today_for_streaks() {
    let clock = FixedClock(days_ago(4));
    let result = StreakService::compute_with_clock(&records_on(&[4, 5]), &clock);

    assert_eq!(result.current_streak, 2);
}

#[test]
fn catalog_is_declared_in_fixed_order() {
    let ids: Vec<BadgeId> = BADGE_CATALOG.iter().map(|badge| badge.id).collect();

    assert_eq!(
        ids,
        vec![
            BadgeId::FirstStep,
            BadgeId::TrackerPro,
            BadgeId::BudgetMaster,
            BadgeId::Saver,
            BadgeId::StreakKing,
            BadgeId::StreakLegend,
        ]
    );
    assert_eq!(BadgeService::catalog().len(), 6);
    let saver = BadgeService::definition(BadgeId::Saver).expect("saver defined");
    assert_eq!(saver.name, "💎 Saver");
    assert_eq!(saver.icon, "💎");
}

#[test]
fn no_activity_earns_nothing() {
    let earned = BadgeService::evaluate(&stats(0, 0.0, 1000.0, 0));

    assert!(earned.is_empty());
}

#[test]
fn full_activity_earns_every_badge_in_catalog_order() {
    let earned = BadgeService::evaluate(&stats(30, 100.0, 1000.0, 30));

    let expected: Vec<&str> = BADGE_CATALOG.iter().map(|badge| badge.name).collect();
    assert_eq!(earned.names(), expected.as_slice());
}

#[test]
fn earned_badges_follow_catalog_order() {
    let earned = BadgeService::evaluate(&stats(1, 0.0, 1000.0, 7));

    assert_eq!(earned.names(), ["🎯 First Step", "🔥 Streak King"]);
    assert_eq!(
        BadgeService::earned_ids(&stats(1, 0.0, 1000.0, 7)),
        vec![BadgeId::FirstStep, BadgeId::StreakKing]
    );
}

#[test]
fn zero_budget_never_earns_budget_badges() {
    let earned = BadgeService::evaluate(&stats(10, 0.0, 0.0, 0));

    assert_eq!(earned.names(), ["🎯 First Step"]);
}

#[test]
fn saver_requires_usage_strictly_below_eighty_percent() {
    let at_ceiling = BadgeService::earned_ids(&stats(5, 800.0, 1000.0, 0));
    assert!(at_ceiling.contains(&BadgeId::BudgetMaster));
    assert!(!at_ceiling.contains(&BadgeId::Saver));

    let below = BadgeService::earned_ids(&stats(5, 799.0, 1000.0, 0));
    assert!(below.contains(&BadgeId::Saver));
}

#[test]
fn budget_badges_need_five_expenses() {
    let earned = BadgeService::earned_ids(&stats(4, 10.0, 1000.0, 0));

    assert_eq!(earned, vec![BadgeId::FirstStep]);
}

#[test]
fn overspending_locks_budget_badges() {
    let earned = BadgeService::earned_ids(&stats(12, 900.0, 800.0, 0));

    assert_eq!(earned, vec![BadgeId::FirstStep]);
}

#[test]
fn badges_are_monotonic_in_each_input() {
    let expense_counts = [0usize, 1, 4, 5, 29, 30];
    let spends = [0.0, 100.0, 799.0, 800.0, 1000.0, 1200.0];
    let budgets = [0.0, 1000.0];
    let streaks = [0u32, 6, 7, 29, 30];

    for &count in &expense_counts {
        for &spent in &spends {
            for &budget in &budgets {
                for &streak in &streaks {
                    let base = stats(count, spent, budget, streak);
                    let earned = BadgeService::earned_ids(&base);
                    let variants = [
                        stats(count + 1, spent, budget, streak),
                        stats(count, spent / 2.0, budget, streak),
                        stats(count, spent, budget, streak + 1),
                    ];
                    for variant in &variants {
                        let after = BadgeService::earned_ids(variant);
                        for id in &earned {
                            assert!(
                                after.contains(id),
                                "{id} lost going from {base:?} to {variant:?}"
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn board_reports_locked_slots() {
    let board = BadgeService::board(&stats(1, 0.0, 1000.0, 7));

    assert_eq!(board.entries.len(), 6);
    assert_eq!(board.earned_count(), 2);
    assert_eq!(board.locked_count(), 4);
    let names: Vec<&str> = board.earned().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, ["🎯 First Step", "🔥 Streak King"]);
}

#[test]
fn snapshot_counts_records_not_days() {
    let records = records_on(&[0, 0, 1]);
    let streak = StreakService::compute(&records, today());
    let snapshot = StatsService::snapshot(&records, 500.0, &streak);

    assert_eq!(snapshot.total_expenses, 3);
    assert_eq!(snapshot.spent, 30.0);
    assert_eq!(snapshot.total_budget, 500.0);
    assert_eq!(snapshot.current_streak, 2);
}

#[test]
fn category_spending_matches_by_name() {
    let records = vec![
        ExpenseRecord::new(today(), 12.0).with_category("Food"),
        ExpenseRecord::new(today(), 8.0).with_category("Food"),
        ExpenseRecord::new(today(), 40.0).with_category("Transport"),
    ];
    let categories = vec![
        Category::new("Food", 15.0),
        Category::new("Transport", 100.0),
        Category::new("Fun", 50.0),
    ];

    let spending = StatsService::category_spending(&categories, &records);

    assert_eq!(spending.len(), 3);
    assert_eq!(spending[0].spent, 20.0);
    assert!(spending[0].is_over_limit());
    assert_eq!(spending[1].spent, 40.0);
    assert_eq!(spending[1].remaining(), 60.0);
    assert_eq!(spending[2].spent, 0.0);
}

#[test]
fn refresh_produces_profile_update() {
    let profile = Profile::new("user@example.com", 1000.0);
    let records: Vec<ExpenseRecord> = (0..5)
        .map(|offset| ExpenseRecord::new(days_ago(offset), 20.0))
        .collect();

    let report = GamificationService::refresh_with_clock(&profile, &records, &FixedClock(today()));

    assert_eq!(report.streak.current_streak, 5);
    assert_eq!(report.stats.spent, 100.0);
    assert_eq!(
        report.badges.names(),
        ["🎯 First Step", "💰 Budget Master", "💎 Saver"]
    );
    assert_eq!(report.board.locked_count(), 3);

    let update = report.profile_update();
    assert_eq!(update.badges, report.badges);
    assert_eq!(update.current_streak, 5);
    assert_eq!(update.longest_streak, 5);
    assert_eq!(update.last_expense_date, Some(today()));
}

#[test]
fn record_dates_accept_common_shapes() {
    let expected = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();

    assert_eq!(parse_record_date("2025-03-14").unwrap(), expected);
    assert_eq!(parse_record_date(" 2025-03-14 ").unwrap(), expected);
    assert_eq!(parse_record_date("2025-03-14T23:30:00Z").unwrap(), expected);
    assert_eq!(parse_record_date("2025-03-14T23:30:00-05:00").unwrap(), expected);
    assert_eq!(parse_record_date("2025-03-14T08:15:00").unwrap(), expected);
    assert_eq!(parse_record_date("2025-03-14 08:15:00.250").unwrap(), expected);
    assert!(matches!(
        parse_record_date("14/03/2025"),
        Err(CoreError::InvalidDate(_))
    ));
}

#[test]
fn amounts_must_be_finite_and_non_negative() {
    assert_eq!(parse_amount(&RawAmount::Number(12.5)).unwrap(), 12.5);
    assert_eq!(parse_amount(&RawAmount::Text(" 7.25 ".into())).unwrap(), 7.25);
    assert!(parse_amount(&RawAmount::Number(-1.0)).is_err());
    assert!(parse_amount(&RawAmount::Text("NaN".into())).is_err());
    assert!(parse_amount(&RawAmount::Text("abc".into())).is_err());
}

#[test]
fn raw_expense_deserializes_loose_json() {
    let raw: RawExpense = serde_json::from_str(
        r#"{"id":"6f1c8a0e-9a43-4a59-9d0b-3a3f7f4a2c11","date":"2025-03-14","amount":"42","category":"Food","notes":""}"#,
    )
    .unwrap();

    let record = raw.validate().unwrap();
    assert_eq!(record.amount, 42.0);
    assert_eq!(record.category, "Food");
    assert_eq!(record.notes, None);
    assert_eq!(
        record.id.to_string(),
        "6f1c8a0e-9a43-4a59-9d0b-3a3f7f4a2c11"
    );
}

#[test]
fn strict_ingest_reports_first_bad_index() {
    let raws = vec![
        RawExpense {
            date: Some("2025-03-14".into()),
            amount: Some(RawAmount::Number(3.0)),
            ..RawExpense::default()
        },
        RawExpense {
            date: Some("not a date".into()),
            amount: Some(RawAmount::Number(3.0)),
            ..RawExpense::default()
        },
    ];

    let err = ingest_strict(raws).unwrap_err();
    assert!(matches!(err, CoreError::RejectedRecord { index: 1, .. }));
}

#[test]
fn lenient_ingest_skips_invalid_records() {
    let raws = vec![
        RawExpense {
            date: Some("2025-03-14".into()),
            amount: Some(RawAmount::Number(3.0)),
            ..RawExpense::default()
        },
        RawExpense {
            date: Some("2025-03-15".into()),
            ..RawExpense::default()
        },
        RawExpense {
            id: Some("not-a-uuid".into()),
            date: Some("2025-03-15".into()),
            amount: Some(RawAmount::Number(1.0)),
            ..RawExpense::default()
        },
    ];

    let outcome = ingest_lenient(raws);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.issues.len(), 2);
    assert_eq!(outcome.issues[0].index, 1);
    assert!(outcome.issues[0].reason.contains("missing amount"));
    assert_eq!(outcome.issues[1].index, 2);
}

#[test]
fn budget_may_be_zero_but_not_negative() {
    assert_eq!(validate_budget(0.0).unwrap(), 0.0);
    assert_eq!(validate_budget(1250.0).unwrap(), 1250.0);
    assert!(matches!(
        validate_budget(-10.0),
        Err(CoreError::InvalidBudget(_))
    ));
    assert!(matches!(
        validate_budget(f64::INFINITY),
        Err(CoreError::InvalidBudget(_))
    ));
}
