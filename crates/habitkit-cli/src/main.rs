use clap::{Parser, Subcommand};

mod commands;
mod common;
mod config;

#[derive(Parser)]
#[command(name = "habitkit-cli", version, about = "Habitkit CLI")]
struct Cli {
    /// Habit collection JSON export (overrides the configured data_path)
    #[arg(long, global = true)]
    data: Option<std::path::PathBuf>,

    /// Reference date as YYYY-MM-DD (defaults to today)
    #[arg(long, global = true)]
    date: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Per-habit streak statistics
    Streaks {
        #[command(subcommand)]
        action: commands::streaks::StreaksAction,
    },
    /// Achievement badges
    Badges {
        #[command(subcommand)]
        action: commands::badges::BadgesAction,
    },
    /// Calendar completion views
    Calendar {
        #[command(subcommand)]
        action: commands::calendar::CalendarAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let ctx = common::Context {
        data: cli.data,
        date: cli.date,
    };

    let result = match cli.command {
        Commands::Streaks { action } => commands::streaks::run(action, &ctx),
        Commands::Badges { action } => commands::badges::run(action, &ctx),
        Commands::Calendar { action } => commands::calendar::run(action, &ctx),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
