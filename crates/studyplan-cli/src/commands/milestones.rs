use std::path::PathBuf;

use clap::Args;
use studyplan_core::storage::{load_milestones, read_milestones};
use studyplan_core::{classify_milestones, Config};
use tracing::debug;

#[derive(Args)]
pub struct MilestonesArgs {
    /// JSON file of milestones (overrides config)
    #[arg(long)]
    file: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn run(args: MilestonesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let milestones = match &args.file {
        Some(path) => {
            debug!(path = %path.display(), "reading milestones from --file");
            read_milestones(path)?
        }
        None => load_milestones(&Config::load_or_default())?,
    };
    let classified = classify_milestones(&milestones);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&classified)?);
        return Ok(());
    }

    if classified.is_empty() {
        println!("No upcoming milestones");
        return Ok(());
    }
    for m in &classified {
        println!(
            "[{:<8}] {:<28} {:<14} {}",
            m.tier.as_str(),
            m.title,
            m.date,
            m.label
        );
    }
    Ok(())
}
