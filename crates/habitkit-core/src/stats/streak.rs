//! Streak computation over one habit's completion logs.
//!
//! Two streak figures are derived from the same sorted view:
//! - **Current streak**: consecutive completed days ending at or
//!   adjacent to the reference date. Broken by an explicit
//!   non-completion or by any calendar-day gap.
//! - **Longest streak**: the maximum run of exactly-consecutive
//!   completed days anywhere in the habit's history.
//!
//! A day with no log at all breaks a run the same way an explicit
//! `completed = false` entry does.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::habit::HabitLog;

/// Derived streak statistics for a single habit.
///
/// Recomputed on every read from the current log collection; never
/// stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSnapshot {
    /// Consecutive completed days ending at or adjacent to the
    /// reference date
    pub current_streak: u32,
    /// Longest run of consecutive completed days in history
    pub longest_streak: u32,
    /// Count of completed log entries
    pub total_completed: u32,
}

/// Calculator for per-habit streak statistics.
///
/// Pure and deterministic: "now" is always the injected reference
/// date, never the wall clock, so results are reproducible in tests
/// and identical across concurrent calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreakCalculator;

impl StreakCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute the streak snapshot for one habit's logs.
    ///
    /// Logs may arrive in any order; a sorted copy is used internally.
    /// Log dates are assumed unique per habit (the write path upserts
    /// by date); duplicate dates yield unspecified output.
    pub fn compute(&self, logs: &[HabitLog], reference_date: NaiveDate) -> StreakSnapshot {
        if logs.is_empty() {
            return StreakSnapshot::default();
        }

        // Most recent first.
        let mut sorted = logs.to_vec();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));

        StreakSnapshot {
            current_streak: current_streak(&sorted, reference_date),
            longest_streak: longest_streak(&sorted),
            total_completed: sorted.iter().filter(|log| log.completed).count() as u32,
        }
    }
}

/// Walk the descending log list starting from the reference date.
///
/// The chain ends at the first explicit non-completion, or when more
/// than one whole day separates the anchor from the next log date.
/// The anchor then moves to that log's date, so a skipped day between
/// two logs breaks the chain even deep in the walk.
fn current_streak(sorted_desc: &[HabitLog], reference_date: NaiveDate) -> u32 {
    let mut anchor = reference_date;
    let mut streak = 0u32;

    for log in sorted_desc {
        if !log.completed {
            break;
        }
        if (anchor - log.date).num_days() > 1 {
            break;
        }
        streak += 1;
        anchor = log.date;
    }

    streak
}

/// Longest run of consecutive calendar days among completed logs.
fn longest_streak(sorted_desc: &[HabitLog]) -> u32 {
    let mut best = 0u32;
    let mut run = 0u32;
    let mut prev_date: Option<NaiveDate> = None;

    for log in sorted_desc.iter().filter(|log| log.completed) {
        run = match prev_date {
            Some(prev) if (prev - log.date).num_days() == 1 => run + 1,
            Some(_) => {
                best = best.max(run);
                1
            }
            None => 1,
        };
        prev_date = Some(log.date);
    }

    best.max(run)
}
