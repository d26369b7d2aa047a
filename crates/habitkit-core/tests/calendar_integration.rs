//! Integration tests for calendar completion views.

use chrono::NaiveDate;
use habitkit_core::{CalendarAnalyzer, Frequency, Habit, ValidationError};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn habit_with_run(from: NaiveDate, days: u32) -> Habit {
    let mut habit = Habit::new("Journal", Frequency::Daily).unwrap();
    for offset in 0..days {
        habit.upsert_log(from + chrono::Duration::days(offset as i64), true);
    }
    habit
}

#[test]
fn test_default_window_is_thirty_days() {
    let analyzer = CalendarAnalyzer::new();
    let report = analyzer.trailing(&[], day(2024, 6, 30));
    assert_eq!(report.days.len(), 30);
    assert_eq!(report.start_date, day(2024, 6, 1));
    assert_eq!(report.end_date, day(2024, 6, 30));
}

#[test]
fn test_trailing_report_over_a_real_habit() {
    let reference = day(2024, 6, 30);
    // Ten-day run ending on the reference date.
    let habit = habit_with_run(day(2024, 6, 21), 10);

    let report = CalendarAnalyzer::new().trailing(&habit.logs, reference);
    assert_eq!(report.completed_days, 10);
    assert!((report.completion_rate - 10.0 / 30.0).abs() < 1e-9);

    // The ten most recent cells are completed, the rest untouched.
    assert!(report.days[20..].iter().all(|d| d.completed));
    assert!(report.days[..20].iter().all(|d| !d.completed));
    assert!(report.days[29].is_reference_day);
}

#[test]
fn test_logs_outside_the_window_are_ignored() {
    let reference = day(2024, 6, 30);
    let mut habit = habit_with_run(day(2024, 6, 28), 3);
    habit.upsert_log(day(2024, 1, 1), true);

    let report = CalendarAnalyzer::with_window(7)
        .unwrap()
        .trailing(&habit.logs, reference);
    assert_eq!(report.completed_days, 3);
}

#[test]
fn test_month_view_matches_the_habit_history() {
    let mut habit = Habit::new("Stretch", Frequency::Daily).unwrap();
    habit.upsert_log(day(2024, 4, 1), true);
    habit.upsert_log(day(2024, 4, 2), false);
    habit.upsert_log(day(2024, 4, 30), true);

    let calendar = CalendarAnalyzer::new().month(&habit.logs, 2024, 4).unwrap();
    assert_eq!(calendar.stats.total_days, 30);
    assert_eq!(calendar.stats.completed_days, 2);
    assert!(calendar.days[0].completed);
    // Explicit non-completion and missing log render the same.
    assert!(!calendar.days[1].completed);
    assert!(!calendar.days[2].completed);
    assert!(calendar.days[29].completed);
}

#[test]
fn test_month_validation_errors_carry_the_input() {
    let err = CalendarAnalyzer::new().month(&[], 2024, 13).unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidMonth {
            year: 2024,
            month: 13
        }
    );
}
