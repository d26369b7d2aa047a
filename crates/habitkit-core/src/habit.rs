//! Habit model types.
//!
//! A habit owns a collection of per-day completion logs. Logs are kept
//! in insertion order, not date order; the analytics in [`crate::stats`]
//! sort copies as needed. Log dates are unique per habit — the write
//! path upserts by date ([`Habit::upsert_log`]) instead of appending
//! duplicates.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ValidationError;

/// Maximum accepted habit title length, in characters.
pub const MAX_TITLE_LEN: usize = 100;

/// How often a habit is meant to be performed.
///
/// Frequency does not change how streaks are counted (all streaks are
/// day-granularity); it feeds the weekly-habit achievement criteria.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Daily => write!(f, "daily"),
            Frequency::Weekly => write!(f, "weekly"),
        }
    }
}

impl FromStr for Frequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            other => Err(ValidationError::InvalidFrequency {
                value: other.to_string(),
            }),
        }
    }
}

/// A single per-day completion record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitLog {
    pub date: NaiveDate,
    pub completed: bool,
}

impl HabitLog {
    pub fn new(date: NaiveDate, completed: bool) -> Self {
        Self { date, completed }
    }

    /// Parse a log from a `YYYY-MM-DD` date string.
    ///
    /// Same format gate as [`parse_day`].
    pub fn parse(date: &str, completed: bool) -> Result<Self, ValidationError> {
        Ok(Self {
            date: parse_day(date)?,
            completed,
        })
    }
}

/// Parse a strict `YYYY-MM-DD` calendar day.
///
/// The shape gate is exact: four digits, dash, two digits, dash, two
/// digits. `2024-1-2` is rejected even though it names a valid day, as
/// is any well-shaped string that is not a real calendar day
/// (`2024-02-30`).
pub fn parse_day(value: &str) -> Result<NaiveDate, ValidationError> {
    let bytes = value.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });

    if !well_shaped {
        return Err(ValidationError::InvalidDate {
            value: value.to_string(),
        });
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        value: value.to_string(),
    })
}

/// A tracked recurring activity and its completion history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub frequency: Frequency,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub logs: Vec<HabitLog>,
}

impl Habit {
    /// Create a habit with a fresh id and an empty log collection.
    ///
    /// The title is trimmed and must be 1..=[`MAX_TITLE_LEN`]
    /// characters afterwards. Construction happens on the write path,
    /// so reading the wall clock for `created_at` is allowed here —
    /// never inside the analytics.
    pub fn new(title: &str, frequency: Frequency) -> Result<Self, ValidationError> {
        Ok(Self {
            id: Uuid::new_v4(),
            title: validate_title(title)?,
            frequency,
            created_at: Utc::now(),
            logs: Vec::new(),
        })
    }

    /// Record a completion state for a date, replacing any existing
    /// entry for that date.
    ///
    /// This is the upsert that keeps log dates unique per habit.
    pub fn upsert_log(&mut self, date: NaiveDate, completed: bool) {
        match self.logs.iter_mut().find(|log| log.date == date) {
            Some(log) => log.completed = completed,
            None => self.logs.push(HabitLog::new(date, completed)),
        }
    }

    /// The log recorded for `date`, if any.
    pub fn log_on(&self, date: NaiveDate) -> Option<&HabitLog> {
        self.logs.iter().find(|log| log.date == date)
    }

    /// Whether a completed log exists for exactly `date`.
    pub fn completed_on(&self, date: NaiveDate) -> bool {
        self.log_on(date).is_some_and(|log| log.completed)
    }
}

fn validate_title(title: &str) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidTitle {
            message: "title must not be empty".to_string(),
        });
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::InvalidTitle {
            message: format!("title must be at most {MAX_TITLE_LEN} characters"),
        });
    }
    Ok(trimmed.to_string())
}
