//! Shared helpers for CLI commands.
//!
//! The CLI plays the collaborator role at the engine boundary: it
//! loads the habit collection from a JSON export, validates caller
//! input (dates, ids), and injects the reference date. The wall clock
//! is read here and only here.

use chrono::{Local, NaiveDate};
use habitkit_core::{parse_day, Habit};
use std::path::PathBuf;
use std::str::FromStr;
use uuid::Uuid;

use crate::config::Config;

/// Global options shared by all data-reading commands.
pub struct Context {
    pub data: Option<PathBuf>,
    pub date: Option<String>,
}

impl Context {
    /// Load the habit collection from `--data`, the configured
    /// `data_path`, or `habits.json` in the working directory.
    pub fn load_habits(&self) -> Result<Vec<Habit>, Box<dyn std::error::Error>> {
        let path = self.data_path();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        let habits: Vec<Habit> = serde_json::from_str(&content)?;
        log::info!("[cli] loaded {} habits from {}", habits.len(), path.display());
        Ok(habits)
    }

    /// Reference date: `--date` if given, local today otherwise.
    pub fn reference_date(&self) -> Result<NaiveDate, Box<dyn std::error::Error>> {
        match &self.date {
            Some(value) => Ok(parse_day(value)?),
            None => Ok(Local::now().date_naive()),
        }
    }

    fn data_path(&self) -> PathBuf {
        if let Some(path) = &self.data {
            return path.clone();
        }
        match Config::load_or_default().data_path {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from("habits.json"),
        }
    }
}

/// Find a habit by its id.
pub fn find_habit<'a>(
    habits: &'a [Habit],
    id: &str,
) -> Result<&'a Habit, Box<dyn std::error::Error>> {
    let id = Uuid::from_str(id).map_err(|_| format!("invalid habit id: {id}"))?;
    habits
        .iter()
        .find(|habit| habit.id == id)
        .ok_or_else(|| format!("habit not found: {id}").into())
}
