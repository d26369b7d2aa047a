//! # Habitkit Core Library
//!
//! Core business logic for Habitkit, a daily/weekly habit tracker.
//! The library is consumed by outer layers (the CLI binary, API
//! handlers); it performs no I/O and never reads the wall clock —
//! callers inject the reference date for every computation, so all
//! analytics are deterministic and trivially unit-testable.
//!
//! ## Architecture
//!
//! - **Habit model**: habits own an unordered collection of per-day
//!   completion logs, unique per date (maintained by the write path)
//! - **Streak engine**: per-habit current/longest streak snapshots
//! - **Achievements**: a fixed badge catalogue evaluated against
//!   cross-habit aggregate statistics
//! - **Calendar views**: trailing-window and civil-month completion
//!   grids for dashboard rendering
//!
//! ## Key Components
//!
//! - [`Habit`] / [`HabitLog`]: the habit model and its per-day logs
//! - [`StreakCalculator`]: per-habit streak snapshot computation
//! - [`BadgeEvaluator`]: achievement badges over aggregate statistics
//! - [`CalendarAnalyzer`]: trailing-window and month completion views

pub mod error;
pub mod habit;
pub mod stats;

pub use error::{CoreError, Result, ValidationError};
pub use habit::{parse_day, Frequency, Habit, HabitLog};
pub use stats::{
    AggregateStats, Badge, BadgeEvaluator, BadgeState, CalendarAnalyzer, CalendarDay,
    CalendarReport, MonthCalendar, MonthStats, StreakCalculator, StreakSnapshot,
    DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
