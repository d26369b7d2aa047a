use chrono::NaiveDate;
use clap::Subcommand;
use habitkit_core::{Frequency, Habit, StreakCalculator, StreakSnapshot};
use serde::Serialize;
use uuid::Uuid;

use crate::common::{self, Context};

#[derive(Subcommand)]
pub enum StreaksAction {
    /// Streak snapshots for every habit
    All,
    /// Streak snapshot for a single habit
    Habit {
        /// Habit id
        id: String,
    },
}

/// One habit row in the output, the shape the dashboard consumes.
#[derive(Serialize)]
struct HabitStreaks<'a> {
    id: Uuid,
    title: &'a str,
    frequency: Frequency,
    streak_data: StreakSnapshot,
}

fn row<'a>(habit: &'a Habit, reference_date: NaiveDate) -> HabitStreaks<'a> {
    HabitStreaks {
        id: habit.id,
        title: &habit.title,
        frequency: habit.frequency,
        streak_data: StreakCalculator::new().compute(&habit.logs, reference_date),
    }
}

pub fn run(action: StreaksAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let habits = ctx.load_habits()?;
    let reference_date = ctx.reference_date()?;

    match action {
        StreaksAction::All => {
            let rows: Vec<HabitStreaks> = habits
                .iter()
                .map(|habit| row(habit, reference_date))
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        StreaksAction::Habit { id } => {
            let habit = common::find_habit(&habits, &id)?;
            println!("{}", serde_json::to_string_pretty(&row(habit, reference_date))?);
        }
    }
    Ok(())
}
