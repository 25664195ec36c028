use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "studyplan-cli", version, about = "StudyPlan CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calendar grid, day drill-down and upcoming events
    Calendar {
        #[command(subcommand)]
        action: commands::calendar::CalendarAction,
    },
    /// Dashboard milestones with urgency
    Milestones(commands::milestones::MilestonesArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Logs go to stderr so `--json` output stays parseable.
/// Verbosity comes from `STUDYPLAN_LOG` (e.g. `STUDYPLAN_LOG=debug`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("STUDYPLAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Calendar { action } => commands::calendar::run(action),
        Commands::Milestones(args) => commands::milestones::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
