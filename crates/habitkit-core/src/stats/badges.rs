//! Achievement badge catalogue and evaluation.
//!
//! The catalogue is a fixed ordered list of badges, each paired with a
//! criterion over [`AggregateStats`]. Earned flags are recomputed in
//! full on every call — badges reflect the current aggregate state,
//! not a persisted achievement history, so toggling a log off can
//! un-earn a badge again.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::habit::Habit;
use crate::stats::aggregate::AggregateStats;
use crate::stats::streak::StreakSnapshot;

/// A static catalogue entry with its user-visible text.
///
/// Serialize-only: catalogue entries are defined once in code and are
/// never parsed back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// The earned state of one catalogue badge, computed fresh per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeState {
    pub badge: Badge,
    pub earned: bool,
}

struct CatalogueEntry {
    badge: Badge,
    criterion: fn(&AggregateStats) -> bool,
}

/// Definition order is display order.
static CATALOGUE: &[CatalogueEntry] = &[
    CatalogueEntry {
        badge: Badge {
            id: "first-habit",
            name: "First Steps",
            description: "Created your first habit",
        },
        criterion: |stats| stats.total_habits >= 1,
    },
    CatalogueEntry {
        badge: Badge {
            id: "habit-builder",
            name: "Habit Builder",
            description: "Created 3 or more habits",
        },
        criterion: |stats| stats.total_habits >= 3,
    },
    CatalogueEntry {
        badge: Badge {
            id: "streak-5",
            name: "5-Day Streak",
            description: "Maintained a 5-day streak on any habit",
        },
        criterion: |stats| stats.max_current_streak >= 5 || stats.max_longest_streak >= 5,
    },
    CatalogueEntry {
        badge: Badge {
            id: "streak-10",
            name: "10-Day Streak",
            description: "Maintained a 10-day streak on any habit",
        },
        criterion: |stats| stats.max_current_streak >= 10 || stats.max_longest_streak >= 10,
    },
    CatalogueEntry {
        badge: Badge {
            id: "streak-30",
            name: "30-Day Streak",
            description: "Maintained a 30-day streak on any habit",
        },
        criterion: |stats| stats.max_current_streak >= 30 || stats.max_longest_streak >= 30,
    },
    CatalogueEntry {
        badge: Badge {
            id: "completion-10",
            name: "10 Completions",
            description: "Completed any habit 10 times",
        },
        criterion: |stats| stats.total_completions >= 10,
    },
    CatalogueEntry {
        badge: Badge {
            id: "completion-50",
            name: "50 Completions",
            description: "Completed any habit 50 times",
        },
        criterion: |stats| stats.total_completions >= 50,
    },
    CatalogueEntry {
        badge: Badge {
            id: "completion-100",
            name: "Century Club",
            description: "Completed any habit 100 times",
        },
        criterion: |stats| stats.total_completions >= 100,
    },
    CatalogueEntry {
        badge: Badge {
            id: "multi-habit",
            name: "Multi-Habit Master",
            description: "Completed multiple habits on the same day",
        },
        criterion: |stats| stats.completed_today_count >= 2,
    },
    CatalogueEntry {
        badge: Badge {
            id: "weekly-warrior",
            name: "Weekly Warrior",
            description: "Created a weekly habit",
        },
        criterion: |stats| stats.has_weekly_habit,
    },
];

/// Evaluator for the achievement badge catalogue.
///
/// Pure over its inputs; all criteria are independent and evaluated
/// against a single [`AggregateStats`] value.
#[derive(Debug, Clone, Copy, Default)]
pub struct BadgeEvaluator;

impl BadgeEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// The catalogue badges in definition order.
    pub fn catalogue() -> Vec<Badge> {
        CATALOGUE.iter().map(|entry| entry.badge).collect()
    }

    /// Evaluate every catalogue badge against the user's habits.
    ///
    /// Output order is catalogue definition order, one state per
    /// badge. Snapshots are looked up by habit id; a missing entry
    /// counts as a zero snapshot.
    pub fn evaluate(
        &self,
        habits: &[Habit],
        snapshots: &HashMap<Uuid, StreakSnapshot>,
        reference_date: NaiveDate,
    ) -> Vec<BadgeState> {
        let stats = AggregateStats::collect(habits, snapshots, reference_date);
        self.evaluate_stats(&stats)
    }

    /// Evaluate against precomputed aggregate statistics.
    pub fn evaluate_stats(&self, stats: &AggregateStats) -> Vec<BadgeState> {
        CATALOGUE
            .iter()
            .map(|entry| BadgeState {
                badge: entry.badge,
                earned: (entry.criterion)(stats),
            })
            .collect()
    }
}
