//! Calendar-view derivations over one habit's completion logs.
//!
//! Two pure views: a trailing window ending at the reference date
//! (the dashboard heatmap) and a civil-month grid. In both, a day
//! counts as completed only when a completed log exists for exactly
//! that date; an absent log and an explicit non-completion render
//! identically, matching the streak engine's behavior.

use chrono::{Datelike, Duration, NaiveDate};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ValidationError;
use crate::habit::HabitLog;

/// Longest accepted trailing window, in days.
pub const MAX_WINDOW_DAYS: u32 = 365;

/// Default trailing window length.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// One day cell of a calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub completed: bool,
    /// Marks the reference day ("today" cell) in trailing windows;
    /// always false in month views
    pub is_reference_day: bool,
}

/// Trailing-window completion report, oldest day first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: Vec<CalendarDay>,
    pub completed_days: u32,
    /// completed_days over window length, 0.0..=1.0
    pub completion_rate: f64,
}

/// Per-month completion summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthStats {
    pub total_days: u32,
    pub completed_days: u32,
    /// completed_days over total_days, 0.0..=1.0
    pub completion_rate: f64,
}

/// Civil-month completion view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarDay>,
    pub stats: MonthStats,
}

/// Analyzer producing calendar views from unsorted logs.
#[derive(Debug, Clone, Copy)]
pub struct CalendarAnalyzer {
    /// Days in the trailing window
    pub days_to_show: u32,
}

impl Default for CalendarAnalyzer {
    fn default() -> Self {
        Self {
            days_to_show: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl CalendarAnalyzer {
    /// Create an analyzer with the default 30-day trailing window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with a custom trailing-window length.
    pub fn with_window(days_to_show: u32) -> Result<Self, ValidationError> {
        if days_to_show == 0 || days_to_show > MAX_WINDOW_DAYS {
            return Err(ValidationError::InvalidWindow {
                days: days_to_show,
            });
        }
        Ok(Self { days_to_show })
    }

    /// The trailing `days_to_show` days ending at `reference_date`
    /// inclusive, oldest first.
    pub fn trailing(&self, logs: &[HabitLog], reference_date: NaiveDate) -> CalendarReport {
        let by_date = completion_by_date(logs);
        let window = self.days_to_show as i64;
        let start_date = reference_date - Duration::days(window - 1);

        let mut days = Vec::with_capacity(self.days_to_show as usize);
        let mut completed_days = 0u32;

        for offset in 0..window {
            let date = start_date + Duration::days(offset);
            let completed = by_date.get(&date).copied().unwrap_or(false);
            if completed {
                completed_days += 1;
            }
            days.push(CalendarDay {
                date,
                completed,
                is_reference_day: date == reference_date,
            });
        }

        let completion_rate = if self.days_to_show > 0 {
            completed_days as f64 / self.days_to_show as f64
        } else {
            0.0
        };

        CalendarReport {
            start_date,
            end_date: reference_date,
            days,
            completed_days,
            completion_rate,
        }
    }

    /// Every day of the civil month `year`-`month` with completion
    /// flags and a month summary.
    pub fn month(
        &self,
        logs: &[HabitLog],
        year: i32,
        month: u32,
    ) -> Result<MonthCalendar, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::InvalidMonth { year, month });
        }

        let first_of_next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let last_day = first_of_next
            .and_then(|d| d.pred_opt())
            .ok_or(ValidationError::InvalidMonth { year, month })?;

        if logs.is_empty() {
            warn!("[stats] month view over empty log collection {year:04}-{month:02}");
        }

        let by_date = completion_by_date(logs);
        let total_days = last_day.day();
        let mut days = Vec::with_capacity(total_days as usize);
        let mut completed_days = 0u32;

        for day in 1..=total_days {
            let date = NaiveDate::from_ymd_opt(year, month, day)
                .ok_or(ValidationError::InvalidMonth { year, month })?;
            let completed = by_date.get(&date).copied().unwrap_or(false);
            if completed {
                completed_days += 1;
            }
            days.push(CalendarDay {
                date,
                completed,
                is_reference_day: false,
            });
        }

        let completion_rate = if total_days > 0 {
            completed_days as f64 / total_days as f64
        } else {
            0.0
        };

        Ok(MonthCalendar {
            year,
            month,
            days,
            stats: MonthStats {
                total_days,
                completed_days,
                completion_rate,
            },
        })
    }
}

fn completion_by_date(logs: &[HabitLog]) -> HashMap<NaiveDate, bool> {
    logs.iter().map(|log| (log.date, log.completed)).collect()
}
