use clap::Subcommand;
use habitkit_core::CalendarAnalyzer;

use crate::common::{self, Context};
use crate::config::Config;

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Trailing completion window ending at the reference date
    Trailing {
        /// Habit id
        id: String,
        /// Window length in days (default from config)
        #[arg(long)]
        days: Option<u32>,
    },
    /// Civil-month completion view
    Month {
        /// Habit id
        id: String,
        year: i32,
        month: u32,
    },
}

pub fn run(action: CalendarAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let habits = ctx.load_habits()?;

    match action {
        CalendarAction::Trailing { id, days } => {
            let habit = common::find_habit(&habits, &id)?;
            let days = days.unwrap_or_else(|| Config::load_or_default().calendar.days_to_show);
            let analyzer = CalendarAnalyzer::with_window(days)?;
            let report = analyzer.trailing(&habit.logs, ctx.reference_date()?);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        CalendarAction::Month { id, year, month } => {
            let habit = common::find_habit(&habits, &id)?;
            let calendar = CalendarAnalyzer::new().month(&habit.logs, year, month)?;
            println!("{}", serde_json::to_string_pretty(&calendar)?);
        }
    }
    Ok(())
}
