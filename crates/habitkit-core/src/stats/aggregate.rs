//! Cross-habit aggregate statistics.
//!
//! Ephemeral input to badge evaluation and dashboard overviews:
//! computed per call from the habit collection and its streak
//! snapshots, never stored.

use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::habit::{Frequency, Habit};
use crate::stats::streak::StreakSnapshot;

/// Aggregate statistics over all of a user's habits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_habits: u32,
    /// Sum of completed log entries across habits
    pub total_completions: u32,
    pub max_current_streak: u32,
    pub max_longest_streak: u32,
    pub has_weekly_habit: bool,
    /// Habits with a completed log dated exactly on the reference day
    pub completed_today_count: u32,
}

impl AggregateStats {
    /// Derive aggregate statistics from habits and their snapshots.
    ///
    /// A habit missing from `snapshots` contributes a zero snapshot;
    /// the completed-today count reads the raw logs, not snapshots.
    pub fn collect(
        habits: &[Habit],
        snapshots: &HashMap<Uuid, StreakSnapshot>,
        reference_date: NaiveDate,
    ) -> Self {
        let mut stats = AggregateStats {
            total_habits: habits.len() as u32,
            ..AggregateStats::default()
        };

        for habit in habits {
            let snapshot = snapshots.get(&habit.id).copied().unwrap_or_default();
            stats.total_completions += snapshot.total_completed;
            stats.max_current_streak = stats.max_current_streak.max(snapshot.current_streak);
            stats.max_longest_streak = stats.max_longest_streak.max(snapshot.longest_streak);
            if habit.frequency == Frequency::Weekly {
                stats.has_weekly_habit = true;
            }
            if habit.completed_on(reference_date) {
                stats.completed_today_count += 1;
            }
        }

        info!(
            "[stats] aggregate habits={} completions={} max_current={} max_longest={} completed_today={}",
            stats.total_habits,
            stats.total_completions,
            stats.max_current_streak,
            stats.max_longest_streak,
            stats.completed_today_count
        );

        stats
    }
}
