//! Statistics module for Habitkit
//!
//! This module is the streak & achievement analytics engine: per-habit
//! streak snapshots, cross-habit aggregate statistics, achievement
//! badge evaluation, and calendar completion views. Everything here is
//! pure and synchronous over in-memory data — callers inject the
//! reference date, so no wall-clock reads happen inside the engine.

mod aggregate;
mod badges;
mod calendar;
mod streak;

pub use aggregate::AggregateStats;

pub use badges::{Badge, BadgeEvaluator, BadgeState};

pub use calendar::{
    CalendarAnalyzer, CalendarDay, CalendarReport, MonthCalendar, MonthStats,
    DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};

pub use streak::{StreakCalculator, StreakSnapshot};
