use clap::Subcommand;
use habitkit_core::{Badge, BadgeEvaluator, StreakCalculator, StreakSnapshot};
use std::collections::HashMap;
use uuid::Uuid;

use crate::common::Context;

#[derive(Subcommand)]
pub enum BadgesAction {
    /// Every catalogue badge with its earned state
    All,
    /// Only the badges earned right now
    Earned,
}

pub fn run(action: BadgesAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let habits = ctx.load_habits()?;
    let reference_date = ctx.reference_date()?;

    let calculator = StreakCalculator::new();
    let snapshots: HashMap<Uuid, StreakSnapshot> = habits
        .iter()
        .map(|habit| (habit.id, calculator.compute(&habit.logs, reference_date)))
        .collect();

    let states = BadgeEvaluator::new().evaluate(&habits, &snapshots, reference_date);

    match action {
        BadgesAction::All => {
            println!("{}", serde_json::to_string_pretty(&states)?);
        }
        BadgesAction::Earned => {
            let earned: Vec<Badge> = states
                .into_iter()
                .filter(|state| state.earned)
                .map(|state| state.badge)
                .collect();
            println!("{}", serde_json::to_string_pretty(&earned)?);
        }
    }
    Ok(())
}
