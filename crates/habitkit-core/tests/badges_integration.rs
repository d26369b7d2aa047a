//! Integration tests for achievement badge evaluation over real
//! habit collections.

use chrono::NaiveDate;
use habitkit_core::{
    AggregateStats, BadgeEvaluator, Frequency, Habit, StreakCalculator, StreakSnapshot,
};
use std::collections::HashMap;
use uuid::Uuid;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn habit(title: &str, frequency: Frequency) -> Habit {
    Habit::new(title, frequency).unwrap()
}

fn snapshots_for(
    habits: &[Habit],
    reference_date: NaiveDate,
) -> HashMap<Uuid, StreakSnapshot> {
    let calculator = StreakCalculator::new();
    habits
        .iter()
        .map(|h| (h.id, calculator.compute(&h.logs, reference_date)))
        .collect()
}

fn earned_ids(states: &[habitkit_core::BadgeState]) -> Vec<&'static str> {
    states
        .iter()
        .filter(|state| state.earned)
        .map(|state| state.badge.id)
        .collect()
}

/// Three habits, 12 completions total, a longest streak of 5, one
/// weekly habit, and two habits completed on the reference day.
fn dashboard_fixture(reference: NaiveDate) -> Vec<Habit> {
    // A 5-day run that ended well before the reference date.
    let mut run = habit("Morning run", Frequency::Daily);
    for d in 1..=5 {
        run.upsert_log(day(2024, 3, d), true);
    }

    // Weekly habit completed on the reference day plus scattered days.
    let mut review = habit("Weekly review", Frequency::Weekly);
    review.upsert_log(reference, true);
    review.upsert_log(day(2024, 3, 4), true);
    review.upsert_log(day(2024, 3, 11), true);
    review.upsert_log(day(2024, 3, 18), true);

    // Daily habit completed on the reference day plus scattered days.
    let mut read = habit("Read", Frequency::Daily);
    read.upsert_log(reference, true);
    read.upsert_log(day(2024, 3, 10), true);
    read.upsert_log(day(2024, 3, 14), true);

    vec![run, review, read]
}

#[test]
fn test_dashboard_scenario_earns_expected_badges() {
    let reference = day(2024, 3, 25);
    let habits = dashboard_fixture(reference);
    let snapshots = snapshots_for(&habits, reference);

    let stats = AggregateStats::collect(&habits, &snapshots, reference);
    assert_eq!(stats.total_habits, 3);
    assert_eq!(stats.total_completions, 12);
    assert_eq!(stats.max_longest_streak, 5);
    assert!(stats.has_weekly_habit);
    assert_eq!(stats.completed_today_count, 2);

    let states = BadgeEvaluator::new().evaluate(&habits, &snapshots, reference);
    assert_eq!(
        earned_ids(&states),
        vec![
            "first-habit",
            "habit-builder",
            "streak-5",
            "completion-10",
            "multi-habit",
            "weekly-warrior",
        ]
    );

    let missing: Vec<&str> = states
        .iter()
        .filter(|state| !state.earned)
        .map(|state| state.badge.id)
        .collect();
    assert_eq!(
        missing,
        vec!["streak-10", "streak-30", "completion-50", "completion-100"]
    );
}

#[test]
fn test_output_always_covers_the_full_catalogue_in_order() {
    let reference = day(2024, 3, 25);
    let states = BadgeEvaluator::new().evaluate(&[], &HashMap::new(), reference);
    let ids: Vec<&str> = states.iter().map(|state| state.badge.id).collect();
    let catalogue_ids: Vec<&str> = BadgeEvaluator::catalogue()
        .iter()
        .map(|badge| badge.id)
        .collect();
    assert_eq!(ids, catalogue_ids);
    assert!(states.iter().all(|state| !state.earned));
}

#[test]
fn test_badges_are_unearned_when_the_data_regresses() {
    let reference = day(2024, 3, 25);
    let mut habits = dashboard_fixture(reference);
    let snapshots = snapshots_for(&habits, reference);
    let before = BadgeEvaluator::new().evaluate(&habits, &snapshots, reference);
    assert!(earned_ids(&before).contains(&"multi-habit"));

    // Toggle one of today's completions off; there is no persisted
    // earned state, so the badge disappears on the next evaluation.
    habits[2].upsert_log(reference, false);
    let snapshots = snapshots_for(&habits, reference);
    let after = BadgeEvaluator::new().evaluate(&habits, &snapshots, reference);
    assert!(!earned_ids(&after).contains(&"multi-habit"));
}

#[test]
fn test_missing_snapshot_entries_count_as_zero() {
    let reference = day(2024, 3, 25);
    let habits = dashboard_fixture(reference);

    // Empty snapshot map: streak- and completion-derived badges all
    // fall away, while habit-count and log-derived criteria survive.
    let states = BadgeEvaluator::new().evaluate(&habits, &HashMap::new(), reference);
    assert_eq!(
        earned_ids(&states),
        vec!["first-habit", "habit-builder", "multi-habit", "weekly-warrior"]
    );
}

#[test]
fn test_current_streak_alone_can_earn_streak_badges() {
    let reference = day(2024, 3, 10);
    let mut daily = habit("Meditate", Frequency::Daily);
    for d in 6..=10 {
        daily.upsert_log(day(2024, 3, d), true);
    }
    let habits = vec![daily];
    let snapshots = snapshots_for(&habits, reference);
    assert_eq!(snapshots[&habits[0].id].current_streak, 5);

    let states = BadgeEvaluator::new().evaluate(&habits, &snapshots, reference);
    assert!(earned_ids(&states).contains(&"streak-5"));
}
